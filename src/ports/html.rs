// src/ports/html.rs
use crate::ports::note_view::{Avatar, NoteView};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Colors used by the note layout
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Theme {
    #[serde(default = "default_emphasized")]
    pub emphasized: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_border")]
    pub border: String,
}

fn default_emphasized() -> String { "#212121".to_string() }
fn default_muted() -> String { "#9e9e9e".to_string() }
fn default_text() -> String { "#424242".to_string() }
fn default_border() -> String { "#eeeeee".to_string() }

impl Default for Theme {
    fn default() -> Self {
        Self {
            emphasized: default_emphasized(),
            muted: default_muted(),
            text: default_text(),
            border: default_border(),
        }
    }
}

impl Theme {
    /// First color that is not a plain CSS color value, by field name
    pub fn invalid_color(&self) -> Option<(&'static str, &str)> {
        let is_color = |value: &str| {
            !value.trim().is_empty()
                && value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "#(),.% -".contains(c))
        };
        [
            ("emphasized", self.emphasized.as_str()),
            ("muted", self.muted.as_str()),
            ("text", self.text.as_str()),
            ("border", self.border.as_str()),
        ]
        .into_iter()
        .find(|(_, value)| !is_color(value))
    }

    pub fn badge_color(&self, emphasized: bool) -> &str {
        if emphasized {
            &self.emphasized
        } else {
            &self.muted
        }
    }
}

#[derive(Debug)]
pub struct HtmlPresenter {
    theme: Theme,
    avatar_size: u32,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::with_theme(Theme::default(), 24)
    }

    pub fn with_theme(theme: Theme, avatar_size: u32) -> Self {
        Self { theme, avatar_size }
    }

    fn render_avatar(&self, avatar: &Avatar) -> String {
        let size = self.avatar_size;
        match avatar {
            Avatar::Image(url) => format!(
                r#"<img class="avatar" src="{}" alt="" width="{size}" height="{size}">"#,
                encode_double_quoted_attribute(url)
            ),
            Avatar::Initials(letters) => format!(
                r#"<span class="avatar" style="width: {size}px; height: {size}px;">{}</span>"#,
                encode_text(letters)
            ),
        }
    }

    /// Render one note as an HTML fragment
    #[instrument(level = "trace", skip(self), fields(note_id = %view.key))]
    pub fn render_note(&self, view: &NoteView) -> String {
        format!(
            r#"<div class="note" id="note-{key}">
    <span class="author">{avatar}<span class="author-name">{author}:</span></span>
    <div class="body">{body}</div>
    <div class="meta">{time_ago} on run <code style="color: {badge_color}">{badge}</code></div>
</div>"#,
            key = encode_double_quoted_attribute(&view.key),
            avatar = self.render_avatar(&view.avatar),
            author = encode_text(&view.author_name),
            body = encode_text(&view.body),
            time_ago = encode_text(&view.time_ago),
            badge_color = encode_double_quoted_attribute(self.theme.badge_color(view.badge.emphasized)),
            badge = encode_text(&view.badge.text),
        )
    }

    /// Render a full page listing `views` in order
    pub fn render_page(&self, title: &str, views: &[NoteView]) -> String {
        let notes = if views.is_empty() {
            r#"<div class="empty">No notes yet</div>"#.to_string()
        } else {
            views
                .iter()
                .map(|view| self.render_note(view))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 640px;
            margin: 2rem auto;
            padding: 0 1rem;
        }}
        .note {{
            border-top: 1px solid {border};
            color: {text};
            padding: 16px;
        }}
        .author {{
            display: flex;
            align-items: center;
        }}
        .avatar {{
            border-radius: 50%;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            background: {border};
            font-size: 0.7em;
        }}
        .author-name {{
            font-size: small;
            margin-left: 8px;
            color: {muted};
            font-weight: 500;
        }}
        .body {{
            margin: 32px 0;
            font-size: small;
            white-space: pre-wrap;
        }}
        .meta {{
            font-size: small;
            color: {muted};
            text-align: right;
        }}
        code {{
            font-size: 12px;
            font-family: monospace;
        }}
        .empty {{
            color: {muted};
            text-align: center;
        }}
    </style>
</head>
<body>
{notes}
</body>
</html>"#,
            title = encode_text(title),
            border = self.theme.border,
            text = self.theme.text,
            muted = self.theme.muted,
            notes = notes,
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}
