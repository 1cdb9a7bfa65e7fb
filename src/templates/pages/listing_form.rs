use maud::{html, Markup, PreEscaped};

use crate::domain::listing::MAX_DESCRIPTION_CHARS;
use crate::domain::tags::TAG_OPTIONS;
use crate::domain::{Condition, ListingId};
use crate::forms::listing::ListingForm;
use crate::forms::FormErrors;
use crate::templates::components::{field_error, notice};
use crate::templates::{desktop_layout, PageCtx};

/// Reads the chosen file into a data URL for the hidden `image` field.
const IMAGE_SCRIPT: &str = r#"
document.addEventListener('change', function (ev) {
  if (ev.target.id !== 'image-file') return;
  var file = ev.target.files && ev.target.files[0];
  if (!file) return;
  var reader = new FileReader();
  reader.onload = function () {
    document.getElementById('image').value = reader.result;
    var preview = document.getElementById('image-preview');
    preview.src = reader.result;
    preview.hidden = false;
  };
  reader.readAsDataURL(file);
});
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ListingId),
}

impl FormMode {
    fn action(&self) -> String {
        match self {
            FormMode::Add => "/add".to_string(),
            FormMode::Edit(id) => format!("/edit/{id}"),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add a listing",
            FormMode::Edit(_) => "Edit listing",
        }
    }
}

/// Shared by add and edit. `store_error` is the raw message from a failed
/// insert/update; the form keeps everything that was typed.
pub fn listing_form_page(
    ctx: PageCtx<'_>,
    mode: FormMode,
    form: &ListingForm,
    errors: Option<&FormErrors>,
    success: Option<&str>,
    store_error: Option<&str>,
) -> Markup {
    let selected = form.condition_or_default();

    desktop_layout(
        ctx,
        mode.title(),
        html! {
            main class="container narrow" {
                h1 { (mode.title()) }

                @if let Some(msg) = success { (notice("success", msg)) }
                @if let Some(msg) = store_error { (notice("error", msg)) }
                @if errors.is_some_and(|e| !e.is_empty()) {
                    (notice("error", "Please fix the highlighted fields."))
                }

                form method="post" action=(mode.action()) class="listing-form" {
                    label for="name" { "Product name" }
                    input type="text" id="name" name="name" value=(form.name) required;
                    (field_error(errors, "name"))

                    label for="description" { "Description" }
                    textarea id="description" name="description" maxlength=(MAX_DESCRIPTION_CHARS) required {
                        (form.description)
                    }
                    (field_error(errors, "description"))

                    div class="row" {
                        div {
                            label for="price" { "Price ($)" }
                            input type="number" id="price" name="price" step="0.01" min="0.01" value=(form.price) required;
                            (field_error(errors, "price"))
                        }
                        div {
                            label for="original_price" { "Original price ($, optional)" }
                            input type="number" id="original_price" name="original_price" step="0.01" min="0.01" value=(form.original_price);
                            (field_error(errors, "original_price"))
                        }
                    }

                    label for="location" { "Location" }
                    input type="text" id="location" name="location" value=(form.location) required;
                    (field_error(errors, "location"))

                    label for="condition" { "Condition" }
                    select id="condition" name="condition" {
                        @for c in Condition::ALL {
                            option value=(c.as_str()) selected[c == selected] { (c.as_str()) }
                        }
                    }
                    (field_error(errors, "condition"))

                    label for="phone" { "WhatsApp number (optional, digits only)" }
                    input type="tel" id="phone" name="phone" inputmode="numeric" pattern="[0-9]{1,15}" maxlength="15" value=(form.phone);
                    (field_error(errors, "phone"))

                    fieldset class="tag-options" {
                        legend { "Tags" }
                        @for tag in TAG_OPTIONS {
                            label class="tag-chip" {
                                input type="checkbox" name="tags" value=(tag) checked[form.has_tag(tag)];
                                span { (tag) }
                            }
                        }
                    }
                    (field_error(errors, "tags"))

                    label for="image-file" {
                        @match mode {
                            FormMode::Add => "Photo",
                            FormMode::Edit(_) => "Replace photo (leave empty to keep the current one)",
                        }
                    }
                    input type="file" id="image-file" accept="image/*";
                    input type="hidden" id="image" name="image" value=(form.image);
                    img id="image-preview" class="image-preview" alt="Selected photo"
                        src=(form.image) hidden[form.image.is_empty()];
                    (field_error(errors, "image"))

                    div class="actions" {
                        button type="submit" class="primary" {
                            @match mode {
                                FormMode::Add => "Publish listing",
                                FormMode::Edit(_) => "Save changes",
                            }
                        }
                        @if let FormMode::Edit(id) = mode {
                            a href=(format!("/product/{id}")) class="button" { "Cancel" }
                        }
                    }
                }

                script { (PreEscaped(IMAGE_SCRIPT)) }
            }
        },
    )
}
