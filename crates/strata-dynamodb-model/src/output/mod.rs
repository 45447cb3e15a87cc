//! Response shapes for the 13 supported operations.
//!
//! Outputs are plain serde targets: the service's response is
//! deserialized as-is, with absent optional fields mapping to `None` (or
//! an empty collection) and never invented. Helper constructors exist
//! where a service implementation assembles responses by hand.

mod batch;
mod item;
mod query;
mod table;

pub use batch::{BatchGetItemOutput, BatchWriteItemOutput};
pub use item::{DeleteItemOutput, GetItemOutput, PutItemOutput, UpdateItemOutput};
pub use query::{QueryOutput, ScanOutput};
pub use table::{
    CreateTableOutput, DeleteTableOutput, DescribeTableOutput, ListTablesOutput,
    UpdateTableOutput,
};
