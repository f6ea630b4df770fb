pub mod frame;
pub mod params;

pub use frame::{__path_handle_background, __path_handle_frame_png};
pub use frame::{__path_handle_recompute, __path_handle_reset};
pub use frame::{
    handle_background, handle_frame_png, handle_recompute, handle_reset, BackgroundResponse,
    FrameResponse,
};
pub use params::{handle_get_params, handle_update_params};
pub use params::{__path_handle_get_params, __path_handle_update_params};
