//! # Zorx Template Renderer
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Content generators for the single project template zorx ships: an Express
//! server with one route and one controller. Every function here is pure; the
//! project generator decides where the output is written.
//!
//! ## Architecture
//!
//! - `entry_file_content(port)`: `app.js`, the server bootstrap.
//! - `route_file_content()`: `src/routes/main.route.js`.
//! - `controller_file_content()`: `src/controllers/main.controller.js`.
//! - `manifest_content(name)`: the `package.json` record, serialized with `serde_json`.
//!
//! [`TEMPLATE_FILES`] ties each source file to its relative path and generator.
//! Substitution is plain `format!` interpolation.
//!
use serde::Serialize;

/// Relative path of the server entry file.
pub const ENTRY_FILE: &str = "app.js";
/// Relative path of the main route file.
pub const ROUTE_FILE: &str = "src/routes/main.route.js";
/// Relative path of the main controller file.
pub const CONTROLLER_FILE: &str = "src/controllers/main.controller.js";
/// Relative path of the manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Inputs available to template generators.
#[derive(Debug, Clone, Copy)]
pub struct TemplateParams {
    pub port: u16,
}

/// A generated source file: where it goes and how its content is produced.
#[derive(Clone, Copy)]
pub struct TemplateFile {
    pub relative_path: &'static str,
    pub render: fn(&TemplateParams) -> String,
}

/// The fixed set of source files written into every project.
pub const TEMPLATE_FILES: [TemplateFile; 3] = [
    TemplateFile {
        relative_path: ENTRY_FILE,
        render: render_entry,
    },
    TemplateFile {
        relative_path: CONTROLLER_FILE,
        render: render_controller,
    },
    TemplateFile {
        relative_path: ROUTE_FILE,
        render: render_route,
    },
];

fn render_entry(params: &TemplateParams) -> String {
    entry_file_content(params.port)
}

fn render_controller(_: &TemplateParams) -> String {
    controller_file_content()
}

fn render_route(_: &TemplateParams) -> String {
    route_file_content()
}

/// Renders `app.js`, listening on `process.env.PORT` or `port`.
///
/// # Arguments
///
/// * `port` - The fallback port. It is the only numeric literal in the output.
///
/// # Returns
///
/// * `String` - The complete file content.
pub fn entry_file_content(port: u16) -> String {
    format!(
        r#"
const cors = require('cors');
const helmet = require('helmet');
const express = require('express');
const mainRoute = require('./src/routes/main.route');

const app = express();
const PORT = process.env.PORT || {port};

// Middleware setup for security and data parsing
app.use(cors());
app.use(helmet());
app.use(express.json());
app.use(express.urlencoded({{ extended: false }}));

// Routes
app.use('/', mainRoute);

// Start server
app.listen(PORT, () => console.log(`Server up and running on port ${{PORT}}`));
"#
    )
}

/// Renders the router exposing `GET /`.
pub fn route_file_content() -> String {
    r#"
const router = require('express').Router();
const { mainEndpoint } = require('../controllers/main.controller');

// Root endpoint route
router.get('/', mainEndpoint);

module.exports = router;
"#
    .to_string()
}

/// Renders the handler behind `GET /`.
pub fn controller_file_content() -> String {
    r#"
const mainEndpoint = async (req, res) => {
  try {
    // Success response for root endpoint
    res.status(200).json({ res: 'Your API is up and running 🚀' });
  } catch (e) {
    // Error handling for server issues
    console.error(e);
    res.status(500).json({ res: 'Server Error' });
  }
};

module.exports = {
  mainEndpoint
};
"#
    .to_string()
}

/// `package.json` as written into the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: ManifestScripts,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    #[serde(rename = "type")]
    pub module_type: String,
}

/// The `scripts` table of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestScripts {
    pub start: String,
    pub dev: String,
}

impl Manifest {
    /// Pretty JSON with two-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an `Err` only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self).map(|mut json| {
            json.push('\n');
            json
        })
    }
}

/// Builds the manifest record for `project_name`.
///
/// The `dev` script uses `node --watch`, so `nodemon` is installed but not required.
///
/// # Arguments
///
/// * `project_name` - Written as `name`.
///
/// # Returns
///
/// * `Manifest` - Ready for [`Manifest::to_json`].
pub fn manifest_content(project_name: &str) -> Manifest {
    Manifest {
        name: project_name.to_string(),
        version: "1.0.0".to_string(),
        description: String::new(),
        main: ENTRY_FILE.to_string(),
        scripts: ManifestScripts {
            start: format!("node {}", ENTRY_FILE),
            dev: format!("node --watch {}", ENTRY_FILE),
        },
        keywords: Vec::new(),
        author: String::new(),
        license: "ISC".to_string(),
        module_type: "commonjs".to_string(),
    }
}
