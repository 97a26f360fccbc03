use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use edgescroll_core::{
    AppConfig, AutoScroll, AutoScrollOptions, ControllerState, Direction, EdgeThresholds,
    FrameQueue, MemorySurface, PointerChannels, PointerEvent, ScrollableSurface, TrackingMode,
};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "100x100", value_parser = parse_size)]
    viewport: (f64, f64),

    /// Content size as WIDTHxHEIGHT
    #[arg(long, default_value = "100x300", value_parser = parse_size)]
    content: (f64, f64),

    /// Initial offset as LEFT,TOP
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    offset: (f64, f64),

    /// Offset change per frame (overrides the config file)
    #[arg(long)]
    step: Option<f64>,

    /// Edge thresholds such as top=20,bottom=20 (overrides the config file)
    #[arg(long, value_parser = parse_edges)]
    edge: Option<EdgeThresholds>,

    /// Pointer channel: mousemove or drag (overrides the config file)
    #[arg(long)]
    mode: Option<TrackingMode>,

    /// Pointer position X,Y; repeat to replay several in order
    #[arg(long = "at", value_parser = parse_point, required = true)]
    points: Vec<(f64, f64)>,

    /// Frames to run after each pointer position
    #[arg(long, default_value_t = 5)]
    frames: usize,

    /// Pace frames at the configured frame rate instead of running them back to back
    #[arg(long)]
    realtime: bool,

    /// Print JSON lines instead of text
    #[arg(long)]
    json: bool,
}

/// One line of simulator output
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record {
    Pointer {
        x: f64,
        y: f64,
        state: String,
    },
    DirectionChange {
        direction: Direction,
    },
    Frame {
        frame: u64,
        scroll_top: f64,
        scroll_left: f64,
        state: String,
    },
    Summary {
        frames: u64,
        writes: usize,
        scroll_top: f64,
        scroll_left: f64,
    },
}

impl Record {
    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
            return Ok(());
        }
        match self {
            Record::Pointer { x, y, state } => println!("pointer ({x}, {y}) -> {state}"),
            Record::DirectionChange { direction } => println!("  direction change: {direction}"),
            Record::Frame { frame, scroll_top, scroll_left, state } => {
                println!("  frame {frame:>4}: top {scroll_top:>8.1} left {scroll_left:>8.1}  {state}")
            }
            Record::Summary { frames, writes, scroll_top, scroll_left } => println!(
                "{frames} frames, {writes} writes, final offset top {scroll_top} left {scroll_left}"
            ),
        }
        Ok(())
    }
}

fn describe(state: ControllerState) -> String {
    match state {
        ControllerState::Inactive => "inactive".to_string(),
        ControllerState::Idle => "idle".to_string(),
        ControllerState::Scrolling(direction) => format!("scrolling {direction}"),
    }
}

pub async fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    let json = args.json;
    for record in replay(config, args).await? {
        record.print(json)?;
    }
    Ok(())
}

/// Replay the pointer positions and collect what happened, in order
async fn replay(config: &AppConfig, args: SimulateArgs) -> Result<Vec<Record>> {
    let mut autoscroll = config.autoscroll.clone();
    if let Some(step) = args.step {
        autoscroll.step = Some(step);
    }
    if let Some(edge) = args.edge {
        autoscroll.edge = edge;
    }
    if let Some(mode) = args.mode {
        autoscroll.track_mouse_event = mode;
    }
    autoscroll.validate()?;

    let (viewport_width, viewport_height) = args.viewport;
    let (content_width, content_height) = args.content;
    let (offset_left, offset_top) = args.offset;
    let surface = Rc::new(
        MemorySurface::new(viewport_width, viewport_height, content_width, content_height)
            .with_offset(offset_left, offset_top),
    );
    let frames = Rc::new(FrameQueue::new());
    let pointer = Rc::new(PointerChannels::new());

    let changes = Rc::new(RefCell::new(Vec::new()));
    let recorded = changes.clone();
    let options = AutoScrollOptions::from_config(surface.clone(), &autoscroll)
        .on_direction_change(move |direction| recorded.borrow_mut().push(direction));

    let mut controller = AutoScroll::new(options, frames.clone(), pointer.clone())?;
    controller.activate();
    tracing::debug!(?controller, "simulation started");

    let mut interval = tokio::time::interval(config.ui.frame_interval());
    let mut records = Vec::new();

    for (x, y) in args.points {
        pointer.dispatch(controller.tracking_mode(), PointerEvent::new(x, y));
        records.push(Record::Pointer { x, y, state: describe(controller.state()) });
        records.extend(
            changes
                .borrow_mut()
                .drain(..)
                .map(|direction| Record::DirectionChange { direction }),
        );

        for _ in 0..args.frames {
            if args.realtime {
                interval.tick().await;
            }
            frames.run_frame();
            records.push(Record::Frame {
                frame: frames.frame_count(),
                scroll_top: surface.scroll_top(),
                scroll_left: surface.scroll_left(),
                state: describe(controller.state()),
            });
        }
    }

    controller.deactivate();
    records.push(Record::Summary {
        frames: frames.frame_count(),
        writes: surface.write_count(),
        scroll_top: surface.scroll_top(),
        scroll_left: surface.scroll_left(),
    });
    Ok(records)
}

fn parse_pair(s: &str, separator: char, what: &str) -> Result<(f64, f64)> {
    let (a, b) = s
        .split_once(separator)
        .ok_or_else(|| anyhow!("expected {what}, got {s:?}"))?;
    Ok((a.trim().parse()?, b.trim().parse()?))
}

fn parse_size(s: &str) -> Result<(f64, f64)> {
    let (width, height) = parse_pair(s, 'x', "WIDTHxHEIGHT")?;
    if width < 0.0 || height < 0.0 {
        return Err(anyhow!("sizes must be non-negative, got {s:?}"));
    }
    Ok((width, height))
}

fn parse_point(s: &str) -> Result<(f64, f64)> {
    parse_pair(s, ',', "X,Y")
}

fn parse_edges(s: &str) -> Result<EdgeThresholds> {
    let mut edges = EdgeThresholds::new();
    for entry in s.split(',').filter(|e| !e.trim().is_empty()) {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected DIRECTION=PIXELS, got {entry:?}"))?;
        let direction: Direction = name.parse()?;
        edges.set(direction, Some(value.trim().parse()?));
    }
    edges.validate()?;
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_and_point() {
        assert_eq!(parse_size("100x300").unwrap(), (100.0, 300.0));
        assert!(parse_size("100").is_err());
        assert!(parse_size("-1x3").is_err());
        assert_eq!(parse_point(" 5, 7.5").unwrap(), (5.0, 7.5));
    }

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges("top=20, right=4").unwrap();
        assert_eq!(edges.top, Some(20.0));
        assert_eq!(edges.right, Some(4.0));
        assert_eq!(edges.left, None);
        assert!(parse_edges("up=3").is_err());
        assert!(parse_edges("top=-3").is_err());
    }

    fn args(points: Vec<(f64, f64)>, frames: usize) -> SimulateArgs {
        SimulateArgs {
            viewport: (100.0, 100.0),
            content: (100.0, 300.0),
            offset: (0.0, 50.0),
            step: Some(5.0),
            edge: Some(EdgeThresholds::new().with(Direction::Top, 20.0)),
            mode: None,
            points,
            frames,
            realtime: false,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_replay_enter_stay_leave() {
        let points = vec![(50.0, 10.0), (50.0, 10.0), (50.0, 60.0)];
        let records = replay(&AppConfig::default(), args(points, 1)).await.unwrap();

        let frame = |frame, scroll_top, state: &str| Record::Frame {
            frame,
            scroll_top,
            scroll_left: 0.0,
            state: state.to_string(),
        };
        let pointer = |y, state: &str| Record::Pointer { x: 50.0, y, state: state.to_string() };
        assert_eq!(
            records,
            vec![
                pointer(10.0, "scrolling top"),
                Record::DirectionChange { direction: Direction::Top },
                frame(1, 45.0, "scrolling top"),
                pointer(10.0, "scrolling top"),
                frame(2, 40.0, "scrolling top"),
                pointer(60.0, "idle"),
                frame(3, 40.0, "idle"),
                Record::Summary { frames: 3, writes: 2, scroll_top: 40.0, scroll_left: 0.0 },
            ]
        );
    }

    #[tokio::test]
    async fn test_replay_rejects_invalid_step() {
        let mut args = args(vec![(50.0, 10.0)], 1);
        args.step = Some(0.0);
        assert!(replay(&AppConfig::default(), args).await.is_err());
    }

    #[test]
    fn test_record_json_is_tagged() {
        let json = serde_json::to_string(&Record::DirectionChange { direction: Direction::Bottom })
            .unwrap();
        assert_eq!(json, r#"{"event":"direction_change","direction":"bottom"}"#);
    }
}
