//! Per-route wrapper used in the `<Routes>` table.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::protected_route::ProtectedRoute;
use crate::routes::AppRoute;

/// Sets the document title for `route` and applies its access level.
#[component]
pub fn RoutedPage(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let title = format!("{} | Solo", route.title());
    let access = route.access();

    view! {
        <Title text=title/>
        <ProtectedRoute access=access>{children()}</ProtectedRoute>
    }
}
