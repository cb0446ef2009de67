//! batframe entry point
//!
//! A thin transport shim around the engine: reads one JSON request from
//! stdin, runs the requested calculation, and writes the JSON response (or
//! a structured `{kind, message}` error) to stdout.
//!
//! ```text
//! batframe paddle-frame < request.json
//! batframe world-frame  < request.json
//! ```

use std::io::Read;
use std::process::ExitCode;

use batframe::api::{ErrorBody, PaddleFrameRequest, WorldFrameRequest};
use batframe::engine;

fn main() -> ExitCode {
    env_logger::init();

    let mode = match std::env::args().nth(1) {
        Some(mode) => mode,
        None => {
            eprintln!("usage: batframe <paddle-frame|world-frame> < request.json");
            return ExitCode::FAILURE;
        }
    };

    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        eprintln!("failed to read request: {err}");
        return ExitCode::FAILURE;
    }

    let result = match mode.as_str() {
        "paddle-frame" => run_paddle_frame(&raw),
        "world-frame" => run_world_frame(&raw),
        other => {
            eprintln!("unknown mode `{other}` (expected paddle-frame or world-frame)");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(body) => {
            log::error!("{}: {}", body.kind, body.message);
            let json = serde_json::to_string_pretty(&body)
                .expect("error body serializes");
            println!("{json}");
            ExitCode::FAILURE
        }
    }
}

fn run_paddle_frame(raw: &str) -> Result<String, ErrorBody> {
    let req: PaddleFrameRequest = parse(raw)?;
    log::info!(
        "paddle-frame request: ball {} m/s @ {} deg, paddle {} m/s @ {} deg, closure {} deg",
        req.v_ball, req.angle_ball, req.v_paddle, req.angle_paddle, req.closed_paddle
    );
    let resp = engine::paddle_frame_result(&req).map_err(|e| ErrorBody::from(&e))?;
    serialize(&resp)
}

fn run_world_frame(raw: &str) -> Result<String, ErrorBody> {
    let req: WorldFrameRequest = parse(raw)?;
    log::info!(
        "world-frame request: outgoing {} m/s @ {} deg",
        req.v_ball_after, req.angle_ball_after
    );
    let resp = engine::world_frame_result(&req).map_err(|e| ErrorBody::from(&e))?;
    serialize(&resp)
}

fn parse<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, ErrorBody> {
    serde_json::from_str(raw)
        .map_err(|e| ErrorBody::new("invalid_input", format!("malformed request: {e}")))
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<String, ErrorBody> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ErrorBody::new("computation", format!("response serialization failed: {e}")))
}
