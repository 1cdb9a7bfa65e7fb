use maud::{html, Markup};

/// Partial swapped into `#auth-result` after a link was issued.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="text-center py-8 px-4 fade-in" {
            h3 class="text-lg leading-6 font-medium text-gray-900" { "Check your email" }

            div class="mt-2" {
                p class="text-sm text-gray-500" {
                    "We sent a sign-in link to "
                    strong class="text-gray-900" { (email) }
                    "."
                }
                p class="text-sm text-gray-500 mt-2" {
                    "Click the link in the email to sign in."
                }
            }

            div class="mt-6" {
                a href="/signin" class="text-sm font-medium text-blue-600 hover:text-blue-500" {
                    "Try with a different email"
                }
            }
        }
    }
}

pub fn request_failed_content(message: &str) -> Markup {
    html! {
        div class="notice notice-error fade-in" role="alert" { (message) }
    }
}
