pub mod camera;
pub mod constants;
pub mod cube;
pub mod faces;
pub mod hit;
pub mod input;
pub mod momentum;
pub mod page;
pub mod relax;
pub mod router;
pub mod scene;
pub mod terminal;
pub mod theme;
pub mod viewport;

pub use faces::{FacePainter, FaceTable};
pub use input::InputEvent;
pub use router::{handle_click, ClickOutcome, Navigator, INTERACTIVE_SELECTOR};
pub use scene::{FrameOutput, Scene, SceneParams};
pub use theme::{Theme, ThemeStore};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
