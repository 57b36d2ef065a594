#![forbid(unsafe_code)]

//! JSON-encoded host input.
//!
//! Hosts that cannot hand DOM objects across (replay tools, tests, workers)
//! push events as small JSON records:
//!
//! ```text
//! {"kind":"click","toggle":true}
//! {"kind":"click","menu":true,"nav_link":true,"href":"#about"}
//! {"kind":"blur","field":"email"}
//! {"kind":"input","field":"message"}
//! {"kind":"submit"}
//! {"kind":"key","key":"Escape"}
//! {"kind":"scroll","y":240}
//! {"kind":"image_error","index":3}
//! ```

use folio_core::event::{ClickTarget, Event, KeyCode};
use folio_core::surface::FieldKind;
use folio_core::{FolioError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EncodedInput {
    Click {
        #[serde(default)]
        toggle: bool,
        #[serde(default)]
        menu: bool,
        #[serde(default)]
        nav_link: bool,
        #[serde(default)]
        href: Option<String>,
    },
    Blur {
        field: String,
    },
    Input {
        field: String,
    },
    Submit,
    Key {
        key: String,
    },
    Scroll {
        y: f64,
    },
    ImageError {
        index: usize,
    },
}

fn field(name: &str) -> Result<FieldKind> {
    FieldKind::from_name(name)
        .ok_or_else(|| FolioError::encoded_input(format!("unknown field {name:?}")))
}

/// Decode one JSON-encoded event.
pub fn decode_event(json: &str) -> Result<Event> {
    let input: EncodedInput =
        serde_json::from_str(json).map_err(|e| FolioError::encoded_input(e.to_string()))?;
    Ok(match input {
        EncodedInput::Click {
            toggle,
            menu,
            nav_link,
            href,
        } => Event::Click(ClickTarget {
            in_toggle: toggle,
            in_menu: menu || nav_link,
            nav_link,
            anchor: href.filter(|h| h.starts_with('#')),
        }),
        EncodedInput::Blur { field: name } => Event::Blur(field(&name)?),
        EncodedInput::Input { field: name } => Event::Input(field(&name)?),
        EncodedInput::Submit => Event::Submit,
        EncodedInput::Key { key } => Event::Key(KeyCode::from_dom_key(&key)),
        EncodedInput::Scroll { y } => {
            if !y.is_finite() {
                return Err(FolioError::encoded_input("scroll offset must be finite"));
            }
            Event::Scroll { y }
        }
        EncodedInput::ImageError { index } => Event::ImageError { index },
    })
}
