//! Access log formatting
//!
//! Renders one line per request in either the Apache/Nginx `combined`
//! layout or a structured `json` layout.

use chrono::Local;

/// Supported access log layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Combined,
    Json,
}

impl LogFormat {
    /// Resolve a configured format name; unknown names fall back to
    /// `combined` so a typo in config never silences the access log.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Combined
        }
    }
}

/// Everything one access log line needs, captured at request time
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Handler time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Render the entry in the given layout
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Combined => self.render_combined(),
            LogFormat::Json => self.render_json(),
        }
    }

    /// The request line: `GET /api/gallery?page=1 HTTP/1.1`
    fn request_line(&self) -> String {
        match &self.query {
            Some(q) => format!("{} {}?{} HTTP/{}", self.method, self.path, q, self.http_version),
            None => format!("{} {} HTTP/{}", self.method, self.path, self.http_version),
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes
    /// "$referer" "$user_agent"`
    fn render_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    fn render_json(&self) -> String {
        // Hand-built JSON keeps the access log off the serde path
        let mut out = String::with_capacity(192);
        out.push('{');
        push_str_field(&mut out, "remote_addr", &self.remote_addr);
        out.push(',');
        push_str_field(&mut out, "time", &self.time.to_rfc3339());
        out.push(',');
        push_str_field(&mut out, "method", &self.method);
        out.push(',');
        push_str_field(&mut out, "path", &self.path);
        out.push(',');
        push_opt_field(&mut out, "query", self.query.as_deref());
        out.push(',');
        push_str_field(&mut out, "http_version", &self.http_version);
        out.push_str(&format!(
            ",\"status\":{},\"body_bytes\":{},",
            self.status, self.body_bytes
        ));
        push_opt_field(&mut out, "referer", self.referer.as_deref());
        out.push(',');
        push_opt_field(&mut out, "user_agent", self.user_agent.as_deref());
        out.push_str(&format!(",\"request_time_us\":{}", self.request_time_us));
        out.push('}');
        out
    }
}

fn push_str_field(out: &mut String, key: &str, value: &str) {
    out.push('"');
    out.push_str(key);
    out.push_str("\":\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_opt_field(out: &mut String, key: &str, value: Option<&str>) {
    match value {
        Some(v) => push_str_field(out, key, v),
        None => {
            out.push('"');
            out.push_str(key);
            out.push_str("\":null");
        }
    }
}

/// JSON string escaping for the characters request data can carry
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AccessLogEntry {
        AccessLogEntry {
            remote_addr: "192.168.1.1".to_string(),
            time: Local::now(),
            method: "GET".to_string(),
            path: "/api/gallery".to_string(),
            query: Some("page=1".to_string()),
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 1234,
            referer: Some("https://example.com".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            request_time_us: 1500,
        }
    }

    #[test]
    fn test_format_name_resolution() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("combined"), LogFormat::Combined);
        assert_eq!(LogFormat::from_name("nonsense"), LogFormat::Combined);
    }

    #[test]
    fn test_render_combined() {
        let line = sample_entry().render(LogFormat::Combined);
        assert!(line.starts_with("192.168.1.1 - - ["));
        assert!(line.contains("\"GET /api/gallery?page=1 HTTP/1.1\""));
        assert!(line.contains(" 200 1234 "));
        assert!(line.ends_with("\"https://example.com\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_render_combined_without_optional_fields() {
        let mut entry = sample_entry();
        entry.query = None;
        entry.referer = None;
        entry.user_agent = None;
        let line = entry.render(LogFormat::Combined);
        assert!(line.contains("\"GET /api/gallery HTTP/1.1\""));
        assert!(line.ends_with("\"-\" \"-\""));
    }

    #[test]
    fn test_render_json() {
        let line = sample_entry().render(LogFormat::Json);
        assert!(line.contains(r#""remote_addr":"192.168.1.1""#));
        assert!(line.contains(r#""method":"GET""#));
        assert!(line.contains(r#""query":"page=1""#));
        assert!(line.contains(r#""status":200"#));
        assert!(line.contains(r#""body_bytes":1234"#));
        assert!(line.contains(r#""request_time_us":1500"#));
    }

    #[test]
    fn test_render_json_null_fields() {
        let mut entry = sample_entry();
        entry.query = None;
        let line = entry.render(LogFormat::Json);
        assert!(line.contains(r#""query":null"#));
    }

    #[test]
    fn test_json_escaping() {
        let mut entry = sample_entry();
        entry.path = "/api/\"quoted\"\npath".to_string();
        let line = entry.render(LogFormat::Json);
        assert!(line.contains(r#"\"quoted\""#));
        assert!(line.contains(r"\n"));
    }
}
