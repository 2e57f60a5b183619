use serde::{Deserialize, Serialize};

/// The generated portfolio site — the only entity returned to the caller.
///
/// All three fields are mandatory strings: `css` and `js` may legitimately be
/// empty, `html` may not. The browser client saves the fields as
/// `index.html`, `style.css`, and `script.js`, and bundles them into
/// `portfolio-files.zip`; nothing is persisted server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}
