//! Static error catalogs
//!
//! Three closed tables map wire vocabulary onto severity, canned message text
//! and the constructor of the typed error:
//!
//! - [`netconf::NETCONF`]: base protocol tags (RFC6241 Appendix A), keyed by
//!   tag then error type
//! - [`yang::YANG`]: YANG tags (RFC6020 section 13), keyed by tag then app-tag
//! - [`vendor::VENDOR`]: the vendor dialect, same shape as the YANG table
//!
//! The tables are built at compile time and never change afterwards.

use crate::error::CatalogError;
use crate::info::ErrorInfo;
use crate::record::MgmtError;
use crate::typed::TypedError;
use crate::types::{ErrorType, Severity};

/// Builds the typed error for a record that matched a catalog entry
pub type Constructor = fn(MgmtError) -> TypedError;

/// A closed set of wire strings
pub trait Vocabulary: Copy + Eq + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::catalog::Vocabulary for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::catalog::Vocabulary::as_str(*self))
            }
        }
    };
}

pub mod netconf;
pub mod vendor;
pub mod yang;

/// Catalog entry for a tag refined by app-tags
#[derive(Debug)]
pub struct AppTagEntry<T: 'static, A: 'static> {
    pub tag: T,
    pub severity: Severity,
    pub message: &'static str,
    pub app_tags: &'static [(A, Constructor)],
}

impl<T: Vocabulary, A: Vocabulary> AppTagEntry<T, A> {
    pub fn constructor(&self, app_tag: A) -> Option<Constructor> {
        self.app_tags
            .iter()
            .find(|(a, _)| *a == app_tag)
            .map(|(_, ctor)| *ctor)
    }
}

/// Catalog keyed by tag then app-tag. Errors from these catalogs are always
/// reported at the application layer.
#[derive(Debug)]
pub struct AppTagCatalog<T: 'static, A: 'static> {
    entries: &'static [AppTagEntry<T, A>],
}

impl<T: Vocabulary, A: Vocabulary> AppTagCatalog<T, A> {
    pub const fn new(entries: &'static [AppTagEntry<T, A>]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [AppTagEntry<T, A>] {
        self.entries
    }

    pub fn entry(&self, tag: T) -> Option<&'static AppTagEntry<T, A>> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Constructor for a wire (tag, app-tag) pair, if both are known
    pub fn lookup(&self, tag: &str, app_tag: &str) -> Option<Constructor> {
        let entry = self.entry(T::from_wire(tag)?)?;
        entry.constructor(A::from_wire(app_tag)?)
    }

    /// Build a record from the entry for `tag`, checking `app_tag` refines it
    pub fn build(
        &self,
        tag: T,
        app_tag: A,
        path: &str,
        info: ErrorInfo,
    ) -> Result<MgmtError, CatalogError> {
        let entry = self
            .entry(tag)
            .ok_or_else(|| CatalogError::InvalidTag(tag.as_str().to_string()))?;
        if entry.constructor(app_tag).is_none() {
            return Err(CatalogError::InvalidAppTag {
                tag: tag.as_str().to_string(),
                app_tag: app_tag.as_str().to_string(),
            });
        }

        Ok(MgmtError {
            error_type: ErrorType::Application.as_str().to_string(),
            tag: tag.as_str().to_string(),
            severity: entry.severity.as_str().to_string(),
            app_tag: app_tag.as_str().to_string(),
            path: path.to_string(),
            message: entry.message.to_string(),
            info,
        })
    }

    /// String keyed variant of [`AppTagCatalog::build`]
    pub fn try_build(
        &self,
        tag: &str,
        app_tag: &str,
        path: &str,
        info: ErrorInfo,
    ) -> Result<MgmtError, CatalogError> {
        let tag_id =
            T::from_wire(tag).ok_or_else(|| CatalogError::InvalidTag(tag.to_string()))?;
        let app_tag_id = A::from_wire(app_tag).ok_or_else(|| CatalogError::InvalidAppTag {
            tag: tag.to_string(),
            app_tag: app_tag.to_string(),
        })?;
        self.build(tag_id, app_tag_id, path, info)
    }
}
