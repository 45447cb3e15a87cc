//! Request shapes for the 13 supported operations.
//!
//! Every input serializes with `PascalCase` field names and omits unset
//! optional fields. Inputs with cross-field rules are assembled through
//! consuming builders that validate once at `build()`; the trivial
//! table-name-only inputs are constructed directly.

mod batch;
mod item;
mod query;
mod table;

pub use batch::{
    BatchGetItemInput, BatchGetItemInputBuilder, BatchWriteItemInput, BatchWriteItemInputBuilder,
};
pub use item::{
    DeleteItemInput, DeleteItemInputBuilder, GetItemInput, GetItemInputBuilder, PutItemInput,
    PutItemInputBuilder, UpdateItemInput, UpdateItemInputBuilder,
};
pub use query::{QueryInput, QueryInputBuilder, ScanInput, ScanInputBuilder};
pub use table::{
    CreateTableInput, CreateTableInputBuilder, DeleteTableInput, DescribeTableInput,
    ListTablesInput, UpdateTableInput, UpdateTableInputBuilder,
};
