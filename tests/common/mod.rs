//! Common test utilities for yuicat integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch project with the default layout
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Modification time of a file in workspace
    pub fn modified(&self, path: &str) -> std::time::SystemTime {
        std::fs::metadata(self.path.join(path))
            .and_then(|m| m.modified())
            .expect("Failed to read modification time")
    }

    /// Push the modification time of a file into the past
    pub fn age_file(&self, path: &str) {
        let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_250_000_000);
        std::fs::File::options()
            .write(true)
            .open(self.path.join(path))
            .and_then(|f| f.set_modified(past))
            .expect("Failed to set modification time");
    }

    /// Install an executable standing in for yuicompressor
    ///
    /// It is called as `SCRIPT --type TYPE -o OUTPUT` and runs `body` with
    /// the concatenated sources on stdin.
    #[cfg(unix)]
    pub fn fake_minifier(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path.join("bin/fake-yuicompressor");
        self.write_file("bin/fake-yuicompressor", &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make minifier executable");
        path
    }

    /// A minifier that writes its input unchanged to the output file
    #[cfg(unix)]
    pub fn passthrough_minifier(&self) -> PathBuf {
        self.fake_minifier(r#"cat > "$4""#)
    }

    /// Write a small site: one page with a stylesheet and two scripts, one page without includes
    pub fn create_site(&self) {
        self.write_file("static/stylesheets/site.css", "body { margin: 0 }\n");
        self.write_file("static/js/jquery.js", "var $ = {};\n");
        self.write_file("static/js/app.js", "$.app = 1;\n");
        self.write_file(
            "templates/index.html",
            &page(&[
                stylesheet("/stylesheets/site.css"),
                script("/js/jquery.js"),
                script("/js/app.js"),
            ]),
        );
        self.write_file("templates/about.html", &page(&[]));
    }
}

/// HTML page whose head holds `includes`
#[allow(dead_code)]
pub fn page(includes: &[String]) -> String {
    let mut html = String::from("<html>\n<head>\n  <title>Test</title>\n");
    for include in includes {
        html.push_str("  ");
        html.push_str(include);
        html.push('\n');
    }
    html.push_str("</head>\n<body>\n</body>\n</html>\n");
    html
}

#[allow(dead_code)]
pub fn script(src: &str) -> String {
    format!(r#"<script type="text/javascript" src="{src}"></script>"#)
}

#[allow(dead_code)]
pub fn stylesheet(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{href}">"#)
}
