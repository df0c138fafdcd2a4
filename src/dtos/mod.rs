pub mod dashboard;
pub mod route_map;
pub mod trip_detail;
pub mod trip_form;
pub mod trip_list;

use serde::Serialize;

/// Where a view's data came from. Anything but `Live` must be shown as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Computed,
    Cache,
    Demo,
    Empty,
}
