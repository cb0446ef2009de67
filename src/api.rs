//! Wire payloads
//!
//! Field names follow the transport contract verbatim (`v_ball`,
//! `closed_paddle`, `x_bat`, ...). The series named `x_ball_after` /
//! `y_ball_after` is the pre-impact path — "after transform" in the
//! contract's naming, not after impact; the post-impact path is `x_f` /
//! `y_f` and only appears in the world-frame result.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

fn finite(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

/// Inputs shared by both calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleFrameRequest {
    /// Incoming ball speed (m/s, > 0)
    pub v_ball: f64,
    /// Incoming ball heading (degrees)
    pub angle_ball: f64,
    /// Paddle speed (m/s, >= 0)
    pub v_paddle: f64,
    /// Paddle direction of travel (degrees)
    pub angle_paddle: f64,
    /// Face closure angle (degrees; 0 = face perpendicular to travel)
    pub closed_paddle: f64,
}

impl PaddleFrameRequest {
    pub fn validate(&self) -> Result<(), EngineError> {
        finite("v_ball", self.v_ball)?;
        finite("angle_ball", self.angle_ball)?;
        finite("v_paddle", self.v_paddle)?;
        finite("angle_paddle", self.angle_paddle)?;
        finite("closed_paddle", self.closed_paddle)?;
        if self.v_ball <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "v_ball",
                value: self.v_ball,
                reason: "speed must be positive",
            });
        }
        if self.v_paddle < 0.0 {
            return Err(EngineError::InvalidInput {
                field: "v_paddle",
                value: self.v_paddle,
                reason: "speed must not be negative",
            });
        }
        Ok(())
    }
}

/// Inputs for the world-frame calculation: the shared fields plus the
/// chosen outgoing state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldFrameRequest {
    #[serde(flatten)]
    pub base: PaddleFrameRequest,
    /// Chosen outgoing speed in the paddle frame (m/s, >= 0)
    pub v_ball_after: f64,
    /// Chosen outgoing heading in the paddle frame (degrees; must lie in
    /// the reachable arc)
    pub angle_ball_after: f64,
}

impl WorldFrameRequest {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.base.validate()?;
        finite("v_ball_after", self.v_ball_after)?;
        finite("angle_ball_after", self.angle_ball_after)?;
        if self.v_ball_after < 0.0 {
            return Err(EngineError::InvalidInput {
                field: "v_ball_after",
                value: self.v_ball_after,
                reason: "speed must not be negative",
            });
        }
        Ok(())
    }
}

/// One frame's plot series. Parallel arrays, earliest point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePlot {
    /// Pre-impact ball path
    pub x_ball_after: Vec<f64>,
    pub y_ball_after: Vec<f64>,
    /// Paddle face segment endpoints
    pub x_bat: [f64; 2],
    pub y_bat: [f64; 2],
    /// Collision point
    pub x_p: f64,
    pub y_p: f64,
    /// Post-impact ball path (world-frame result only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x_f: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_f: Option<Vec<f64>>,
    /// Trajectory-angle arc (paddle-frame plot only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x_arc: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_arc: Option<Vec<f64>>,
}

/// Visualization blocks for the paddle-frame calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleFrameVisualization {
    pub world_frame: FramePlot,
    pub paddle_frame: FramePlot,
}

/// Result of the paddle-frame calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleFrameResponse {
    /// Incoming heading in the paddle frame, degrees in (-180, 180]
    pub ball_traj_angle: f64,
    /// Incoming speed in the paddle frame (m/s)
    pub ball_traj_speed: f64,
    pub visualization: PaddleFrameVisualization,
}

/// Visualization block for the world-frame calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldFrameVisualization {
    pub world_frame: FramePlot,
}

/// Result of the world-frame calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldFrameResponse {
    /// Outgoing heading in the world frame (degrees)
    pub angle_ball_after_in_w: f64,
    /// Outgoing speed in the world frame (m/s)
    pub speed_ball_after_in_w: f64,
    pub visualization: WorldFrameVisualization,
}

/// Structured error payload for transport layers: stable kind + message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&EngineError> for ErrorBody {
    fn from(err: &EngineError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}
