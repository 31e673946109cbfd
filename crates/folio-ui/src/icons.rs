//! Inline SVG icons.
//!
//! Icons are plain markup strings so the static generator and the Leptos
//! components emit identical output.

use crate::social::ContactKind;

const GITHUB_PATH: &str = "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.1.79-.25.79-.56v-2c-3.2.7-3.87-1.37-3.87-1.37-.52-1.33-1.28-1.68-1.28-1.68-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.69 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.59.23 2.76.11 3.05.74.81 1.18 1.83 1.18 3.09 0 4.42-2.69 5.39-5.26 5.68.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5Z";

const LINKEDIN_PATH: &str = "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28ZM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13ZM7.12 20.45H3.56V9h3.56v11.45ZM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0Z";

const EMAIL_PATH: &str = "M2 4h20a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H2a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Zm0 2v.51l10 6.25 10-6.25V6H2Zm20 2.87-9.47 5.92a1 1 0 0 1-1.06 0L2 8.87V18h20V8.87Z";

const SUN_PATH: &str = "M12 17a5 5 0 1 1 0-10 5 5 0 0 1 0 10Zm0-2a3 3 0 1 0 0-6 3 3 0 0 0 0 6ZM11 1h2v3h-2V1Zm0 19h2v3h-2v-3ZM3.52 4.93l1.41-1.41 2.12 2.12-1.41 1.41-2.12-2.12Zm13.43 13.43 1.41-1.41 2.12 2.12-1.41 1.41-2.12-2.12ZM19.07 3.52l1.41 1.41-2.12 2.12-1.41-1.41 2.12-2.12ZM5.64 16.95l1.41 1.41-2.12 2.12-1.41-1.41 2.12-2.12ZM23 11v2h-3v-2h3ZM4 11v2H1v-2h3Z";

const MOON_PATH: &str = "M10 7a7 7 0 0 0 12 4.9v.1c0 5.52-4.48 10-10 10S2 17.52 2 12 6.48 2 12 2h.1A6.98 6.98 0 0 0 10 7Zm-6 5a8 8 0 0 0 15.64 2.4A9 9 0 0 1 8.6 4.36 8 8 0 0 0 4 12Z";

fn svg(path: &str, colour: &str, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="{size}" height="{size}" fill="{colour}" aria-hidden="true"><path d="{path}"/></svg>"#
    )
}

/// Icon for a contact link.
pub fn contact_icon(kind: ContactKind, colour: &str) -> String {
    let path = match kind {
        ContactKind::Github => GITHUB_PATH,
        ContactKind::Linkedin => LINKEDIN_PATH,
        ContactKind::Email => EMAIL_PATH,
    };
    svg(path, colour, 28)
}

/// Icon for the theme toggle; shows the mode a click switches to.
pub fn theme_toggle_icon(is_dark_mode_enabled: bool, colour: &str) -> String {
    let path = if is_dark_mode_enabled {
        SUN_PATH
    } else {
        MOON_PATH
    };
    svg(path, colour, 22)
}
