//! Frame-by-frame rendering pipeline.
//!
//! The crate never rasterizes anything itself: every frame is emitted as a
//! `.pov` file and handed to the external POV-Ray process, and finished
//! frame sequences are stitched into a video by an external ffmpeg
//! invocation.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{bail, Context};
use log::{debug, info};

use crate::config::Settings;
use crate::frame::{FrameInfo, FrameRange};
use crate::scene::Scene;
use crate::sdl::scene_to_sdl;
use crate::traits::SceneProvider;

/// Write a scene description to a `.pov` file
pub fn write_pov(scene: &Scene, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(path, scene_to_sdl(scene))
        .with_context(|| format!("writing scene to {}", path.display()))
}

/// Render one frame: emit SDL, invoke POV-Ray, return the PNG path
pub fn render_frame(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
    frame: FrameInfo,
) -> anyhow::Result<PathBuf> {
    let started = Instant::now();
    let scene = provider.frame(frame);

    let stem = format!("{}_{:04}", settings.output_prefix, frame.number);
    let pov_path = settings.output_dir.join(format!("{}.pov", stem));
    let png_path = settings.output_dir.join(format!("{}.png", stem));
    write_pov(&scene, &pov_path)?;

    let mut command = Command::new(&settings.povray_binary);
    command
        .arg(format!("+W{}", settings.image_width))
        .arg(format!("+H{}", settings.image_height))
        .arg(format!("+Q{}", settings.quality));
    if settings.antialias > 0.0 {
        command.arg(format!("+A{}", settings.antialias));
    } else {
        command.arg("-A");
    }
    command
        .arg("-D")
        .arg(format!("+I{}", pov_path.display()))
        .arg(format!("+O{}", png_path.display()));

    let output = command
        .output()
        .with_context(|| format!("spawning '{}'", settings.povray_binary))?;
    if !output.status.success() {
        bail!(
            "povray failed on frame {} ({}): {}",
            frame.number,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    debug!(
        "frame {} rendered in {:.2?} ({} objects)",
        frame.number,
        started.elapsed(),
        scene.object_count()
    );
    Ok(png_path)
}

/// Render a single frame of the animation as a PNG
pub fn render_png(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
    frame_number: u32,
) -> anyhow::Result<PathBuf> {
    let range = FrameRange::new(settings.n_frames(), settings.frame_rate);
    let path = render_frame(provider, settings, range.frame(frame_number))?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Write one frame's scene description as pretty-printed JSON, for
/// inspecting or diffing scenes without invoking the renderer
pub fn dump_json(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
    frame_number: u32,
) -> anyhow::Result<PathBuf> {
    let range = FrameRange::new(settings.n_frames(), settings.frame_rate);
    let scene = provider.frame(range.frame(frame_number));

    let path = settings
        .output_dir
        .join(format!("{}_{:04}.json", settings.output_prefix, frame_number));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&scene).context("serializing scene to JSON")?;
    std::fs::write(&path, json)
        .with_context(|| format!("writing scene to {}", path.display()))?;

    info!("wrote {}", path.display());
    Ok(path)
}

/// Render every frame of the animation, in order
pub fn render_all_frames(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
) -> anyhow::Result<Vec<PathBuf>> {
    let total = settings.n_frames();
    info!(
        "rendering '{}': {} frames at {} fps",
        provider.name(),
        total,
        settings.frame_rate
    );

    let mut frames = Vec::with_capacity(total as usize);
    for frame in FrameRange::new(total, settings.frame_rate) {
        info!(
            "@time: {:.3}s, step: {} of {}",
            frame.time, frame.number, total
        );
        frames.push(render_frame(provider, settings, frame)?);
    }
    Ok(frames)
}

/// Render all frames and encode them into an MP4
pub fn render_mp4(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
) -> anyhow::Result<PathBuf> {
    let name = provider.name().to_string();
    render_all_frames(provider, settings)?;
    let out = settings.output_dir.join(format!("{}.mp4", name));
    encode(
        settings,
        &out,
        &["-c:v", "libx264", "-pix_fmt", "yuv420p"],
    )?;
    Ok(out)
}

/// Render all frames and encode them into a GIF
pub fn render_gif(
    provider: &mut dyn SceneProvider,
    settings: &Settings,
) -> anyhow::Result<PathBuf> {
    let name = provider.name().to_string();
    render_all_frames(provider, settings)?;
    let out = settings.output_dir.join(format!("{}.gif", name));
    encode(settings, &out, &[])?;
    Ok(out)
}

fn encode(settings: &Settings, out: &Path, codec_args: &[&str]) -> anyhow::Result<()> {
    let pattern = settings
        .output_dir
        .join(format!("{}_%04d.png", settings.output_prefix));

    let output = Command::new(&settings.ffmpeg_binary)
        .arg("-y")
        .arg("-framerate")
        .arg(settings.frame_rate.to_string())
        .arg("-i")
        .arg(&pattern)
        .args(codec_args)
        .arg(out)
        .output()
        .with_context(|| format!("spawning '{}'", settings.ffmpeg_binary))?;
    if !output.status.success() {
        bail!(
            "ffmpeg failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    info!("wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Camera, LightSource};
    use glam::Vec3;

    #[test]
    fn test_write_pov_creates_parents_and_file() {
        let dir = std::env::temp_dir().join("povanim_write_pov_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("frame_0000.pov");

        let scene = Scene::new(
            Camera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO),
            vec![LightSource::new(Vec3::new(2.0, 4.0, -3.0), 1.0).into()],
        );
        write_pov(&scene, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("camera {"));
        assert!(text.contains("light_source {"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_dump_json_round_trips() {
        let dir = std::env::temp_dir().join("povanim_dump_json_test");
        let _ = std::fs::remove_dir_all(&dir);
        let settings = Settings {
            output_dir: dir.clone(),
            ..Default::default()
        };

        let mut provider = crate::scenes::AxesScene::new();
        let path = dump_json(&mut provider, &settings, 3).unwrap();
        assert!(path.ends_with("frame_0003.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Scene = serde_json::from_str(&text).unwrap();
        let range = FrameRange::new(settings.n_frames(), settings.frame_rate);
        assert_eq!(parsed, provider.frame(range.frame(3)));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
