pub mod view_router;

pub use view_router::ActiveView;
