//! Error macros for transit-route

/// Macro for rejecting adjacency data that breaks a graph invariant
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::RouteError::invalid_graph(format!($($arg)*)))
    };
}

/// Macro for rejecting a station that is not in the graph
#[macro_export]
macro_rules! bail_unknown_node {
    ($id:expr) => {
        return Err($crate::error::RouteError::unknown_node($id))
    };
}
