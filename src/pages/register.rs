//! Register Page
//!
//! Classic form post to `/register`; the only client-side behavior is
//! the password confirmation check, which blocks submission.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// `(name, label, type)` of each form field, in render order. Every
/// input is posted under its name; the server reads exactly these
/// names, so an input without one silently drops out of the form body.
const REGISTER_FIELDS: [(&str, &str, &str); 4] = [
    ("username", "Username:", "text"),
    ("email", "Email:", "email"),
    ("password", "Password:", "password"),
    ("confirm-password", "Confirm Password:", "password"),
];

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        if password.get_untracked() != confirm.get_untracked() {
            ev.prevent_default();
            dom::alert("Passwords do not match!");
        }
    };

    let rows = REGISTER_FIELDS
        .iter()
        .map(|&(name, label, kind)| {
            let track = match name {
                "password" => Some(set_password),
                "confirm-password" => Some(set_confirm),
                _ => None,
            };
            view! {
                <div class="form-row">
                    <label for=name>{label}</label>
                    <input
                        type=kind
                        id=name
                        name=name
                        required
                        on:input=move |ev| {
                            if let Some(setter) = track {
                                setter.set(input_value(&ev));
                            }
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <main class="auth-box">
            <div class="auth-box-header">
                <h2>"Create Account"</h2>
                <p>"Join and start writing with your characters"</p>
            </div>
            <form class="auth-form" method="post" action="/register" on:submit=on_submit>
                {rows}
                <button type="submit" class="btn-submit">"Register"</button>
            </form>
            <p class="auth-footer">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_posts_under_the_name_the_server_reads() {
        let names: Vec<&str> = REGISTER_FIELDS.iter().map(|&(name, _, _)| name).collect();
        // The server-side equality check reads both password fields from
        // the form body, so the confirm field must be posted too.
        assert_eq!(names, ["username", "email", "password", "confirm-password"]);
    }
}
