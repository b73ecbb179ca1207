//! Local stylesheet pointing at the cached font.

use crate::config::{FONT_FAMILY, FontSettings};

/// Build the stylesheet that declares `font_file_name` (relative to the
/// stylesheet itself) and the `.material-symbols-outlined` utility class.
pub fn local_stylesheet(settings: &FontSettings, font_file_name: &str) -> String {
    let FontSettings { fill, weight, grade, optical_size } = settings;
    format!(
        "/* {FONT_FAMILY} */
@font-face {{
  font-family: '{FONT_FAMILY}';
  font-style: normal;
  font-weight: {weight};
  font-display: block;
  src: url('./{font_file_name}') format('woff2');
}}

.material-symbols-outlined {{
  font-family: '{FONT_FAMILY}';
  font-weight: normal;
  font-style: normal;
  font-size: 24px;
  line-height: 1;
  letter-spacing: normal;
  text-transform: none;
  display: inline-block;
  white-space: nowrap;
  word-wrap: normal;
  direction: ltr;
  font-feature-settings: 'liga';
  -webkit-font-feature-settings: 'liga';
  -webkit-font-smoothing: antialiased;
  font-variation-settings:
    'FILL' {fill},
    'wght' {weight},
    'GRAD' {grade},
    'opsz' {optical_size};
}}"
    )
}
