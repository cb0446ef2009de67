//! Pure collision kinematics
//!
//! Everything in this module is a stateless function of its inputs:
//! - No I/O, no caching, no shared state
//! - Angles in degrees at the API surface, radians only inside trig
//! - Headings always via `atan2`, never a y/x division
//!
//! The paddle frame used throughout is co-moving and co-rotated: the
//! paddle's direction of travel is its +x axis, and the collision point is
//! the origin of both frames.

pub mod collision;
pub mod frame;
pub mod state;
pub mod trajectory;

pub use collision::{Rebound, face_normal, rebound, reflect};
pub use frame::{rotate_deg, to_paddle_frame, to_world_frame};
pub use state::{BallState, CollisionEvent, Experiment, PaddleState};
pub use trajectory::{LinearPath, face_segment};
