use crate::auth::sessions::SessionUser;
use crate::domain::contact::owner_display_name;
use maud::{html, Markup, DOCTYPE};

/// What every full page needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub struct PageCtx<'a> {
    pub app_name: &'a str,
    pub user: Option<&'a SessionUser>,
}

impl<'a> PageCtx<'a> {
    pub fn new(app_name: &'a str, user: Option<&'a SessionUser>) -> Self {
        Self { app_name, user }
    }

    pub fn email(&self) -> Option<&'a str> {
        self.user.map(|u| u.email.as_str())
    }
}

pub fn desktop_layout(ctx: PageCtx<'_>, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (ctx.app_name) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#524ed2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M6 2l-3 4v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2 -2v-14l-3 -4z" {}
                          path d="M3 6h18" {}
                          path d="M16 10a4 4 0 0 1 -8 0" {}
                      }
                      span { (ctx.app_name) }
                  }
                  nav {
                      ul {
                          li { a href="/marketplace" { "Marketplace" } }
                          @if ctx.user.is_some() {
                              li { a href="/add" { "Sell" } }
                              li { a href="/profile" { "Profile" } }
                          }
                      }
                  }

                  @match ctx.user {
                      Some(user) => {
                          form method="post" action="/auth/signout" class="inline" {
                              span class="muted" { (owner_display_name(&user.email)) }
                              " "
                              button type="submit" class="link" { "Sign out" }
                          }
                      }
                      None => {
                          a href="/signin" class="text-base font-medium hover:text-blue-600" { "Sign in" }
                      }
                  }
              }
                (content)
              footer class="site-footer" {
                  a href="/privacy-policy" { "Privacy Policy" }
                  " · "
                  a href="/tos" { "Terms of Service" }
              }
            }
        }
    }
}
