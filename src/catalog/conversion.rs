use super::Catalog;
use crate::error::CatalogError;

/// A trait for custom content formats that can be converted into a `Catalog`.
///
/// The bundled JSON document format implements this trait. Authoring tools that keep
/// cases in another shape (a CMS export, a spreadsheet, YAML) implement it on their own
/// structs and hand the result to the progression engine. The returned catalog must come
/// from [`Catalog::new`] so that it passes the same structural checks as the JSON loader.
///
/// # Example
///
/// ```rust,no_run
/// use sleuth::prelude::*;
/// use sleuth::error::CatalogError;
///
/// struct Sheet { rows: Vec<(String, String)> }
///
/// impl IntoCatalog for Sheet {
///     fn into_catalog(self) -> std::result::Result<Catalog, CatalogError> {
///         let cases = self
///             .rows
///             .into_iter()
///             .map(|(id, title)| CaseDefinition {
///                 id,
///                 title,
/// #               description: String::new(),
/// #               scenario: String::new(),
/// #               evidence: vec![],
/// #               target_flowchart: vec![],
/// #               target_pseudocode: String::new(),
/// #               hints: vec![],
/// #               estimated_minutes: 10,
///             })
///             .collect();
///         Catalog::new(LevelConfig::default(), cases)
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a validated catalog.
    fn into_catalog(self) -> Result<Catalog, CatalogError>;
}
