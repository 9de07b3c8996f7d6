// src/sites/mod.rs

//! Site registry and URL resolution.
//!
//! Each registered site is a strategy knowing how to locate title,
//! author and body in that site's HTML. A URL is resolved to a strategy
//! by literal prefix match against the registry, in registration order.

mod all_poetry;
mod best_poems;
mod hello_poetry;
mod loc_laureate;
mod my_poetic_side;
mod poem_hunter;
mod poetry_archive;
mod poetry_foundation;
mod poetry_nook;
mod poets_org;

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::PoemFields;
use crate::text::TextConverter;

/// A site-specific extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    PoetryFoundation,
    PoetsOrg,
    PoemHunter,
    LocLaureate,
    AllPoetry,
    HelloPoetry,
    PoetryArchive,
    MyPoeticSide,
    BestPoems,
    PoetryNook,
}

impl Site {
    /// Short identifier used in logs and error values.
    pub fn name(&self) -> &'static str {
        match self {
            Site::PoetryFoundation => "poetryfoundation",
            Site::PoetsOrg => "poetsorg",
            Site::PoemHunter => "poemhunter",
            Site::LocLaureate => "loc_laureate",
            Site::AllPoetry => "allpoetry",
            Site::HelloPoetry => "hellopoetry",
            Site::PoetryArchive => "poetryarchive",
            Site::MyPoeticSide => "mypoeticside",
            Site::BestPoems => "bestpoems",
            Site::PoetryNook => "poetrynook",
        }
    }

    /// Apply this site's extraction rules to a parsed document.
    pub fn extract(&self, doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
        match self {
            Site::PoetryFoundation => poetry_foundation::extract(doc, converter),
            Site::PoetsOrg => poets_org::extract(doc, converter),
            Site::PoemHunter => poem_hunter::extract(doc, converter),
            Site::LocLaureate => loc_laureate::extract(doc, converter),
            Site::AllPoetry => all_poetry::extract(doc, converter),
            Site::HelloPoetry => hello_poetry::extract(doc, converter),
            Site::PoetryArchive => poetry_archive::extract(doc, converter),
            Site::MyPoeticSide => my_poetic_side::extract(doc, converter),
            Site::BestPoems => best_poems::extract(doc, converter),
            Site::PoetryNook => poetry_nook::extract(doc, converter),
        }
    }
}

/// A URL prefix bound to a site strategy.
#[derive(Debug, Clone, Copy)]
pub struct SiteHandler {
    pub prefix: &'static str,
    pub site: Site,
}

/// Registered handlers in precedence order.
///
/// Resolution takes the first prefix that matches, so a more specific
/// prefix must be registered before any shorter prefix of the same
/// host. The registry is immutable at run time.
pub const REGISTRY: &[SiteHandler] = &[
    SiteHandler {
        prefix: "https://www.poetryfoundation.org",
        site: Site::PoetryFoundation,
    },
    SiteHandler {
        prefix: "https://poets.org",
        site: Site::PoetsOrg,
    },
    SiteHandler {
        prefix: "https://www.poets.org",
        site: Site::PoetsOrg,
    },
    SiteHandler {
        prefix: "https://www.poemhunter.com",
        site: Site::PoemHunter,
    },
    SiteHandler {
        prefix: "https://www.loc.gov/programs/poetry-and-literature/poet-laureate/poet-laureate-projects/",
        site: Site::LocLaureate,
    },
    SiteHandler {
        prefix: "https://allpoetry.com",
        site: Site::AllPoetry,
    },
    SiteHandler {
        prefix: "https://hellopoetry.com",
        site: Site::HelloPoetry,
    },
    SiteHandler {
        prefix: "https://www.poetryarchive.org",
        site: Site::PoetryArchive,
    },
    SiteHandler {
        prefix: "https://mypoeticside.com",
        site: Site::MyPoeticSide,
    },
    SiteHandler {
        prefix: "https://www.best-poems.net",
        site: Site::BestPoems,
    },
    SiteHandler {
        prefix: "https://poetrynook.com",
        site: Site::PoetryNook,
    },
];

/// Resolve a URL to its handler by literal prefix match.
///
/// Pure lookup; returns `UnresolvedSite` when no registered prefix is a
/// prefix of the URL.
pub fn resolve(url: &str) -> Result<&'static SiteHandler> {
    REGISTRY
        .iter()
        .find(|handler| url.starts_with(handler.prefix))
        .ok_or_else(|| AppError::unresolved(url))
}
