//! The core transform: replace the include marker with inlined templates.
//!
//! ```text
//! <body>                                 <body>
//!   <!-- Gulp Knockout Templates -->  →    <script type="text/html" id="user/card">...</script>
//! </body>                                  <script type="text/html" id="user/list">...</script>
//!                                        </body>
//! ```
//!
//! Only the first marker is replaced. Any later copies stay in the output as
//! plain text. Templates are read one at a time and each file handle is closed
//! before the next is opened.

use crate::config::ResolvedSettings;
use crate::discovery::{self, TemplateEntry};
use crate::docs;
use crate::error::{KnockoutError, Result};
use crate::observer::InlineObserver;

/// Comment marking where templates are inserted.
pub const MARKER: &str = "<!-- Gulp Knockout Templates -->";

/// Wrap template content in a `text/html` script block identified by `name`.
pub fn render_fragment(name: &str, content: &str) -> String {
    format!(r#"<script type="text/html" id="{name}">{content}</script>"#)
}

/// Inline every discovered template into `buffer` at the first [`MARKER`].
///
/// Returns `buffer` unchanged when the marker is absent. A template that cannot
/// be read aborts the whole transform.
pub fn inline(
    buffer: &str,
    settings: &ResolvedSettings,
    observer: &dyn InlineObserver,
) -> Result<String> {
    let Some(marker_start) = buffer.find(MARKER) else {
        observer.marker_missing();
        return Ok(buffer.to_string());
    };
    let marker_end = marker_start + MARKER.len();

    let templates = discovery::list_templates(settings)?;
    if templates.is_empty() {
        observer.no_templates(&discovery::wildcard(&settings.path, &settings.suffix));
    }

    let mut output = String::with_capacity(buffer.len());
    output.push_str(&buffer[..marker_start]);
    for template in &templates {
        output.push_str(&inline_template(template, settings, observer)?);
    }
    output.push_str(&buffer[marker_end..]);

    Ok(output)
}

/// Read, optionally strip, and wrap a single template.
fn inline_template(
    template: &TemplateEntry,
    settings: &ResolvedSettings,
    observer: &dyn InlineObserver,
) -> Result<String> {
    if settings.debug {
        observer.processing_template(&template.name);
    }

    let raw = std::fs::read(&template.path).map_err(|e| KnockoutError::TemplateRead {
        path: template.path.clone(),
        source: e,
    })?;
    let mut content = String::from_utf8_lossy(&raw).into_owned();

    if settings.remove_docs {
        content = docs::remove_docs(&content, settings.debug, observer);
    }

    Ok(render_fragment(&template.name, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::recording::{Event, RecordingObserver};
    use crate::observer::SilentObserver;

    fn settings_for(dir: &tempfile::TempDir, sub: &str) -> ResolvedSettings {
        let path = format!("{}/{sub}", dir.path().display());
        ResolvedSettings {
            default_path: path.clone(),
            path,
            ..Default::default()
        }
    }

    fn write(dir: &tempfile::TempDir, relative: &str, contents: &str) {
        let path = dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_missing_marker_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/foo.tmpl.html", "<p>hi</p>");
        let observer = RecordingObserver::default();
        let buffer = "<html><!-- Gulp Templates --></html>";
        let output = inline(buffer, &settings_for(&dir, "t/"), &observer).unwrap();
        assert_eq!(output, buffer);
        assert_eq!(observer.events(), vec![Event::MarkerMissing]);
    }

    #[test]
    fn test_zero_templates_deletes_marker() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&dir, "t/");
        let observer = RecordingObserver::default();
        let output = inline(&format!("A{MARKER}B"), &settings, &observer).unwrap();
        assert_eq!(output, "AB");
        assert_eq!(
            observer.events(),
            vec![Event::NoTemplates(discovery::wildcard(&settings.path, &settings.suffix))]
        );
    }

    #[test]
    fn test_single_template() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/foo.tmpl.html", "<p>hi</p>");
        let output = inline(&format!("X{MARKER}Y"), &settings_for(&dir, "t/"), &SilentObserver).unwrap();
        assert_eq!(output, r#"X<script type="text/html" id="foo"><p>hi</p></script>Y"#);
    }

    #[test]
    fn test_root_without_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/foo.tmpl.html", "<p>hi</p>");
        let output = inline(MARKER, &settings_for(&dir, "t"), &SilentObserver).unwrap();
        assert_eq!(output, r#"<script type="text/html" id="/foo"><p>hi</p></script>"#);
    }

    #[test]
    fn test_templates_in_sorted_order_with_nested_names() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/b.tmpl.html", "B");
        write(&dir, "t/a.tmpl.html", "A");
        write(&dir, "t/sub/c.tmpl.html", "C");
        let output = inline(MARKER, &settings_for(&dir, "t/"), &SilentObserver).unwrap();
        assert_eq!(
            output,
            concat!(
                r#"<script type="text/html" id="a">A</script>"#,
                r#"<script type="text/html" id="b">B</script>"#,
                r#"<script type="text/html" id="sub/c">C</script>"#,
            )
        );
    }

    #[test]
    fn test_only_first_marker_replaced() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/foo.tmpl.html", "F");
        let buffer = format!("1{MARKER}2{MARKER}3");
        let output = inline(&buffer, &settings_for(&dir, "t/"), &SilentObserver).unwrap();
        assert_eq!(
            output,
            format!(r#"1<script type="text/html" id="foo">F</script>2{MARKER}3"#)
        );
    }

    #[test]
    fn test_single_marker_consumed() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/foo.tmpl.html", "<p>hi</p>");
        let output = inline(
            &format!("<body>\n  {MARKER}\n</body>"),
            &settings_for(&dir, "t/"),
            &SilentObserver,
        )
        .unwrap();
        assert!(!output.contains(MARKER));
        assert!(output.starts_with("<body>\n  <script"));
        assert!(output.ends_with("</script>\n</body>"));
    }

    #[test]
    fn test_remove_docs_strips_first_block_only() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "t/card.tmpl.html",
            "<!-- parameters: title -->\n<h2></h2><!-- parameters: again -->",
        );
        let mut settings = settings_for(&dir, "t/");
        settings.remove_docs = true;
        let output = inline(MARKER, &settings, &SilentObserver).unwrap();
        assert_eq!(
            output,
            r#"<script type="text/html" id="card">
<h2></h2><!-- parameters: again --></script>"#
        );
    }

    #[test]
    fn test_docs_kept_without_remove_docs() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/card.tmpl.html", "<!-- parameters: title --><h2></h2>");
        let output = inline(MARKER, &settings_for(&dir, "t/"), &SilentObserver).unwrap();
        assert!(output.contains("<!-- parameters: title -->"));
    }

    #[test]
    fn test_debug_reports_each_template() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/a.tmpl.html", "<!-- parameters: x -->A");
        write(&dir, "t/b.tmpl.html", "B");
        let mut settings = settings_for(&dir, "t/");
        settings.debug = true;
        settings.remove_docs = true;
        let observer = RecordingObserver::default();
        inline(MARKER, &settings, &observer).unwrap();
        assert_eq!(
            observer.events(),
            vec![
                Event::Processing("a".into()),
                Event::DocsRemoved("<!-- parameters: x -->".into()),
                Event::Processing("b".into()),
            ]
        );
    }

    #[test]
    fn test_quiet_without_debug() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/a.tmpl.html", "A");
        let observer = RecordingObserver::default();
        inline(MARKER, &settings_for(&dir, "t/"), &observer).unwrap();
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_default_path_prefix_in_names() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "app/views/row.tmpl.html", "R");
        let settings = ResolvedSettings {
            path: format!("{}/app/views/", dir.path().display()),
            default_path: format!("{}/app/", dir.path().display()),
            ..Default::default()
        };
        let output = inline(MARKER, &settings, &SilentObserver).unwrap();
        assert_eq!(output, r#"<script type="text/html" id="views/row">R</script>"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_template_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "t/ok.tmpl.html", "OK");
        std::os::unix::fs::symlink(
            dir.path().join("t/missing-target"),
            dir.path().join("t/dead.tmpl.html"),
        )
        .unwrap();
        let err = inline(MARKER, &settings_for(&dir, "t/"), &SilentObserver).unwrap_err();
        match err {
            KnockoutError::TemplateRead { path, .. } => {
                assert!(path.to_string_lossy().ends_with("dead.tmpl.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_fragment() {
        assert_eq!(
            render_fragment("x", "<i></i>"),
            r#"<script type="text/html" id="x"><i></i></script>"#
        );
    }
}
