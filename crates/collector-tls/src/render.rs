//! Rendering of resolved TLS settings into agent configuration text

use crate::conf::TlsConf;

/// A named piece of generated configuration that the composition layer
/// splices into the agent's config file.
pub trait Fragment {
    /// Name the composition layer refers to this fragment by.
    fn name(&self) -> &str;

    /// The fragment text. An empty string means nothing is emitted.
    fn render(&self) -> String;
}

impl Fragment for TlsConf {
    fn name(&self) -> &str {
        "vectorTLS"
    }

    /// Render the `[<component>.<id>.tls]` table.
    ///
    /// Key order is fixed: downstream parsers depend on it. The key and
    /// certificate files are only written as a pair.
    fn render(&self) -> String {
        if !self.needs_enabled {
            return String::new();
        }

        let mut lines = vec![format!("[{}.{}.tls]", self.component, self.id)];
        if !self.tls_min_version.is_empty() {
            lines.push(entry("min_tls_version", &self.tls_min_version));
        }
        if !self.cipher_suites.is_empty() {
            lines.push(entry("ciphersuites", &self.cipher_suites));
        }
        if self.insecure_skip_verify {
            lines.push("verify_certificate = false".to_string());
            lines.push("verify_hostname = false".to_string());
        }
        if self.has_key_pair() {
            lines.push(entry("key_file", &self.key_path));
            lines.push(entry("crt_file", &self.cert_path));
        }
        if !self.ca_file_path.is_empty() {
            lines.push(entry("ca_file", &self.ca_file_path));
        }
        if !self.pass_phrase.is_empty() {
            lines.push(entry("key_pass", &self.pass_phrase));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn entry(key: &str, value: &str) -> String {
    format!("{key} = {}", toml::Value::String(value.to_string()))
}
