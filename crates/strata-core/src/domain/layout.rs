//! The fixed layered layout.
//!
//! Everything a scaffolded app contains is declared here as `&'static`
//! tables: four layers, their boilerplate files, the nested domain
//! folders, and the env-file template. Content is known entirely at
//! compile time; the only runtime input to the whole tool is the app
//! name.
//!
//! ## Design Decisions
//!
//! ### Why `&'static str` for content?
//!
//! The layout ships in the binary. No loading, no parsing, no rendering
//! engine — a table lookup and a write. If user-defined layouts ever
//! arrive these become `String` behind the same accessors.
//!
//! ### Why are folder `__init__` files in the file tables?
//!
//! Layer directories get an *empty* marker file (see [`MARKER_FILE`]).
//! Nested folders instead carry a one-line `__init__` describing the
//! folder's purpose, so those live in the folder's own file table like
//! any other boilerplate file.

use std::fmt;

/// Marker file written into every layer directory. Empty by contract.
pub const MARKER_FILE: &str = "__init__";

/// Name of the environment file written at the app root.
pub const ENV_FILE_NAME: &str = ".env";

/// Content of the environment file.
pub const ENV_TEMPLATE: &str = "# Django environment variables
DEBUG=True
SECRET_KEY=your-secret-key-here
DATABASE_URL=sqlite:///db.sqlite3
ALLOWED_HOSTS=localhost,127.0.0.1

# Add your environment variables below
";

// ── Layers ────────────────────────────────────────────────────────────────────

/// One architectural concern of the generated app.
///
/// The order of [`Layer::ALL`] is the order layers are materialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Presentation,
    Application,
    Domain,
    Infrastructure,
}

impl Layer {
    /// All layers, in materialization order.
    pub const ALL: [Layer; 4] = [
        Layer::Presentation,
        Layer::Application,
        Layer::Domain,
        Layer::Infrastructure,
    ];

    /// Directory name of this layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presentation => "presentation",
            Self::Application => "application",
            Self::Domain => "domain",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Layout tables ─────────────────────────────────────────────────────────────

/// A single boilerplate file: name within its directory plus literal content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub name: &'static str,
    pub content: &'static str,
}

/// A nested folder inside a layer, with its own file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderSpec {
    pub name: &'static str,
    pub files: &'static [TemplateFile],
}

/// One layer's flat files and nested folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub layer: Layer,
    pub files: &'static [TemplateFile],
    pub folders: &'static [FolderSpec],
}

/// The complete, fixed layout.
///
/// There is exactly one layout; [`Layout::builtin`] hands out a view of
/// the static tables. Identical across all invocations.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    layers: &'static [LayerSpec],
}

impl Layout {
    /// The built-in layered layout.
    pub fn builtin() -> Self {
        Self { layers: &LAYERS }
    }

    /// Layer specs in materialization order.
    pub fn layers(&self) -> &'static [LayerSpec] {
        self.layers
    }
}

static LAYERS: [LayerSpec; 4] = [
    LayerSpec {
        layer: Layer::Presentation,
        files: &[
            TemplateFile {
                name: "views",
                content: "# Presentation layer: This module contains the view functions or class-based views.\n",
            },
            TemplateFile {
                name: "urls",
                content: "# Presentation layer: Define URL patterns for the app here.
from django.urls import path

urlpatterns = [
    # TODO: add URL patterns here
]
",
            },
            TemplateFile {
                name: "serializers",
                content: "# Presentation layer: Define serializers for API responses.
# Used for converting model instances to JSON or other content types.
from rest_framework import serializers

# TODO: Add your serializers here
",
            },
        ],
        folders: &[],
    },
    LayerSpec {
        layer: Layer::Application,
        files: &[TemplateFile {
            name: "services",
            content: "# Application layer: Contains business logic and use cases.\n",
        }],
        folders: &[],
    },
    LayerSpec {
        layer: Layer::Domain,
        files: &[],
        folders: &[
            FolderSpec {
                name: "validators",
                files: &[
                    TemplateFile {
                        name: "__init__",
                        content: "# Domain layer: Contains validation rules for the domain entities.\n",
                    },
                    TemplateFile {
                        name: "validators",
                        content: "# Domain validators
def validate_entity(entity):
    # TODO: implement validation logic
    pass
",
                    },
                ],
            },
            FolderSpec {
                name: "selectors",
                files: &[
                    TemplateFile {
                        name: "__init__",
                        content: "# Domain layer: Contains selectors for querying domain-specific data.\n",
                    },
                    TemplateFile {
                        name: "selectors",
                        content: "# Domain selectors
def select_active_items(items):
    # TODO: implement selection logic
    return [item for item in items if item.get('active')]
",
                    },
                ],
            },
            FolderSpec {
                name: "utilities",
                files: &[
                    TemplateFile {
                        name: "__init__",
                        content: "# Domain layer: Utility functions related to the domain.\n",
                    },
                    TemplateFile {
                        name: "utilities",
                        content: "# Domain utilities
def format_entity(entity):
    # TODO: implement a method to format or transform the domain entity
    pass
",
                    },
                ],
            },
        ],
    },
    LayerSpec {
        layer: Layer::Infrastructure,
        files: &[TemplateFile {
            name: "models",
            content: "# Infrastructure layer: Contains Django models.
# IMPORTANT: Move your model definitions here from the default models.py.
from django.db import models

class ExampleModel(models.Model):
    # TODO: define your model fields
    name = models.CharField(max_length=255)

    def __str__(self):
        return self.name
",
        }],
        folders: &[],
    },
];

// ── tests ─────────────────────────────────────────────────────────────────────
