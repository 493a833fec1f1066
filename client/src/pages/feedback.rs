//! Community feedback page: list with new/top sort and a submit form with an
//! optional screenshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Talks to `/api/feedback` through the shared client, so an expired session
//! here is bounced to `/login` like any other API call.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

use crate::net::api::fetch_feedback;
use crate::net::types::{FeedbackItem, FeedbackSort, FeedbackSubmission};

pub const CATEGORIES: [&str; 5] = ["Bug Report", "Feature Request", "User Experience", "Performance Issue", "Other"];

const MAX_TITLE_CHARS: usize = 120;

/// Largest screenshot accepted before upload; the host caps bodies at 10 MiB.
pub const MAX_SCREENSHOT_BYTES: u64 = 8 * 1024 * 1024;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let sort = RwSignal::new(FeedbackSort::New);
    let refresh = RwSignal::new(0_u32);
    let feedback = LocalResource::new(move || {
        refresh.track();
        fetch_feedback(sort.get())
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let screenshot_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submission = match validate_submission(&title.get(), &description.get(), &category.get()) {
            Ok(submission) => submission,
            Err(reason) => {
                message.set(Some(reason.to_owned()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let input = screenshot_input.get_untracked();
            let picked = input.as_ref().and_then(|el| el.files()).and_then(|files| files.get(0));
            let mut form = submission.to_form();
            if let Some(file) = picked {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let size = file.size() as u64;
                if let Err(reason) = validate_screenshot(&file.type_(), size) {
                    message.set(Some(reason.to_owned()));
                    return;
                }
                form = form.file(FeedbackSubmission::SCREENSHOT_FIELD, file);
            }

            busy.set(true);
            message.set(Some("Submitting...".to_owned()));
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_feedback(&form).await {
                    Ok(_) => {
                        title.set(String::new());
                        description.set(String::new());
                        category.set(String::new());
                        if let Some(el) = input {
                            el.set_value("");
                        }
                        message.set(Some("Feedback submitted successfully!".to_owned()));
                        refresh.update(|n| *n = n.wrapping_add(1));
                    }
                    Err(e) => message.set(Some(format!("Failed to submit feedback: {e}"))),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, screenshot_input);
        }
    };

    let list = move || {
        feedback.get().map(|result| match result {
            Ok(items) if items.is_empty() => {
                view! { <p class="feedback__empty">"No feedback yet. Be the first!"</p> }.into_any()
            }
            Ok(items) => view! {
                <ul class="feedback__list">
                    {items.into_iter().map(|item| view! { <FeedbackRow item=item/> }).collect::<Vec<_>>()}
                </ul>
            }
            .into_any(),
            Err(e) => view! { <p class="feedback__error">{format!("Failed to load feedback: {e}")}</p> }.into_any(),
        })
    };

    let sort_class = move |value: FeedbackSort| {
        if sort.get() == value { "btn btn--toggle btn--active" } else { "btn btn--toggle" }
    };

    view! {
        <section class="page page--feedback">
            <h1 class="page__title">"Feedback"</h1>

            <form class="feedback-form" on:submit=on_submit>
                <label class="feedback-form__label">
                    "Title"
                    <input
                        class="feedback-form__input"
                        type="text"
                        placeholder="Short, descriptive title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="feedback-form__label">
                    "Description"
                    <textarea
                        class="feedback-form__input"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="feedback-form__label">
                    "Category"
                    <select
                        class="feedback-form__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="feedback-form__label">
                    "Screenshot"
                    <input class="feedback-form__input" type="file" accept="image/*" node_ref=screenshot_input/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit Feedback"
                </button>
                <Show when=move || message.get().is_some()>
                    <p class="feedback-form__message">{move || message.get().unwrap_or_default()}</p>
                </Show>
            </form>

            <div class="feedback__header">
                <h2>"Community Feedback"</h2>
                <div class="feedback__sort">
                    <button class=move || sort_class(FeedbackSort::New) on:click=move |_| sort.set(FeedbackSort::New)>
                        "New"
                    </button>
                    <button class=move || sort_class(FeedbackSort::Top) on:click=move |_| sort.set(FeedbackSort::Top)>
                        "Top"
                    </button>
                </div>
            </div>
            <Suspense fallback=move || view! { <p>"Loading feedback..."</p> }>{list}</Suspense>
        </section>
    }
}

#[component]
fn FeedbackRow(item: FeedbackItem) -> impl IntoView {
    let meta = format!(
        "{} \u{b7} By @{} on {}",
        item.category,
        item.user.username,
        display_date(&item.created_at)
    );
    let screenshot = item.screenshot_url.map(|url| {
        view! {
            <a class="feedback__screenshot" href=url target="_blank" rel="external noopener">
                "View screenshot"
            </a>
        }
    });
    view! {
        <li class="feedback__item">
            <h3 class="feedback__title">{item.title}</h3>
            <p class="feedback__description">{item.description}</p>
            {screenshot}
            <span class="feedback__meta">{meta}</span>
        </li>
    }
}

/// Trim and check the form before anything goes over the wire.
pub(crate) fn validate_submission(
    title: &str,
    description: &str,
    category: &str,
) -> Result<FeedbackSubmission, &'static str> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return Err("Title and description are required.");
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err("Title must be 120 characters or fewer.");
    }
    if !CATEGORIES.contains(&category) {
        return Err("Select a category.");
    }
    Ok(FeedbackSubmission {
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
    })
}

/// Screenshots must be images and fit under [`MAX_SCREENSHOT_BYTES`].
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn validate_screenshot(content_type: &str, size_bytes: u64) -> Result<(), &'static str> {
    if !content_type.starts_with("image/") {
        return Err("Screenshot must be an image.");
    }
    if size_bytes > MAX_SCREENSHOT_BYTES {
        return Err("Screenshot must be 8 MB or smaller.");
    }
    Ok(())
}

/// Calendar date of an RFC 3339 timestamp; other formats pass through.
fn display_date(created_at: &str) -> &str {
    created_at.split_once('T').map_or(created_at, |(date, _)| date)
}
