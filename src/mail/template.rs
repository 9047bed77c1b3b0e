//! HTML rendering for relayed feedback.

use super::{Feedback, MailSettings, OutgoingEmail};

/// Escape HTML special characters to prevent markup injection.
///
/// `&` is replaced first so the entities produced by later replacements are
/// not escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the HTML body for a feedback submission.
///
/// Every user-supplied field is escaped. Line breaks in the message are kept
/// as `<br>`.
pub fn render_feedback_html(feedback: &Feedback) -> String {
    let message = escape_html(&feedback.message)
        .replace("\r\n", "\n")
        .replace('\n', "<br>\n");

    format!(
        "<h2>New Feedback</h2>\n\
         <p><strong>From:</strong> {name} ({email})</p>\n\
         <p><strong>App Version:</strong> {version}</p>\n\
         <hr>\n\
         <p>{message}</p>\n",
        name = escape_html(&feedback.name),
        email = escape_html(&feedback.email),
        version = escape_html(&feedback.app_version),
    )
}

/// Build the outgoing email for a feedback submission.
pub fn compose_feedback_email(settings: &MailSettings, feedback: &Feedback) -> OutgoingEmail {
    OutgoingEmail {
        from: settings.from.clone(),
        to: settings.to.clone(),
        reply_to: feedback.email.clone(),
        subject: settings.subject.clone(),
        html: render_feedback_html(feedback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_script_injection() {
        let escaped = escape_html(r#"<script>"x"</script> & y"#);
        assert_eq!(
            escaped,
            "&lt;script&gt;&quot;x&quot;&lt;/script&gt; &amp; y"
        );
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_escape_html_ampersand() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_html_existing_entity() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_single_quote() {
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_render_escapes_all_fields() {
        let feedback = Feedback {
            name: "<b>Eve</b>".to_string(),
            email: "eve@example.com\"><img>".to_string(),
            app_version: "<1.0>".to_string(),
            message: "<script>alert(1)</script>".to_string(),
        };
        let html = render_feedback_html(&feedback);

        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(html.contains("eve@example.com&quot;&gt;&lt;img&gt;"));
        assert!(html.contains("&lt;1.0&gt;"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img>"));
    }

    #[test]
    fn test_render_keeps_line_breaks() {
        let feedback = Feedback::new("a@b.com", "line one\r\nline two\nline three", None, None);
        let html = render_feedback_html(&feedback);
        assert!(html.contains("line one<br>\nline two<br>\nline three"));
    }

    #[test]
    fn test_render_includes_placeholders() {
        let feedback = Feedback::new("a@b.com", "hi", None, None);
        let html = render_feedback_html(&feedback);
        assert!(html.contains("Anonymous (a@b.com)"));
        assert!(html.contains("<strong>App Version:</strong> Unknown"));
    }

    #[test]
    fn test_compose_feedback_email() {
        let settings = MailSettings {
            from: "Feedback <feedback@example.com>".to_string(),
            to: "team@example.com".to_string(),
            subject: "New Feedback".to_string(),
        };
        let feedback = Feedback::new("a@b.com", "hi", Some("Alice"), Some("2.0.1"));
        let email = compose_feedback_email(&settings, &feedback);

        assert_eq!(email.from, "Feedback <feedback@example.com>");
        assert_eq!(email.to, "team@example.com");
        assert_eq!(email.reply_to, "a@b.com");
        assert_eq!(email.subject, "New Feedback");
        assert!(email.html.contains("Alice (a@b.com)"));
    }
}
