/// Component module exports
pub mod banner;
pub mod expander;
pub mod form;
pub mod metric;
pub mod radar;
pub mod table;

pub use banner::NoticeList;
pub use expander::{ExpanderList, ExpanderState, Section};
pub use form::{FieldMut, FieldRef, SelectField, TextField};
pub use metric::{MetricRow, MetricTile};
pub use radar::RadarChart;
pub use table::{create_row, TableWidget};
