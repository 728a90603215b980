//! Raw catalog handling: the column allow-list, file I/O, and typed row access.

pub mod columns;
pub mod io;
pub mod record;

pub use columns::{
    ColumnCoverage, ColumnSelection, ESSENTIAL_COLUMNS, column_coverage, describe_missing,
    select_columns,
};
pub use io::{load_catalog, save_catalog};
pub use record::{CatalogRow, rows_from_frame};
