//! PNG snapshot export with the view embedded as tEXt chunks.

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use mandelzoom_core::{ColorMode, ViewState};

use crate::buffer::FrameBuffer;
use crate::error::RenderError;

const SOFTWARE: &str = "MandelZoom";

/// View and render settings recorded alongside an exported frame.
#[derive(Debug, Clone)]
pub struct ExportMetadata {
    pub view: ViewState,
    pub max_iteration: u32,
    pub color_mode: ColorMode,
    pub frame_index: u64,
}

/// Write `frame` as an RGBA PNG at `path`.
///
/// Uses the `png` crate directly so the view can be stored in tEXt chunks
/// readable by exiftool and most image viewers.
pub fn export_png(
    frame: &FrameBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    let file = std::fs::File::create(path).map_err(|e| export_err("failed to create file", e))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    for (key, value) in metadata_pairs(frame, metadata) {
        encoder
            .add_text_chunk(key.clone(), value)
            .map_err(|e| export_err(&format!("failed to add text chunk '{key}'"), e))?;
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| export_err("failed to write PNG header", e))?;
    writer
        .write_image_data(&frame.to_rgba())
        .map_err(|e| export_err("failed to write PNG image data", e))?;

    debug!(
        width = frame.width(),
        height = frame.height(),
        path = %path.display(),
        "Exported PNG"
    );
    Ok(())
}

fn export_err(what: &str, e: impl std::fmt::Display) -> RenderError {
    RenderError::Export(format!("{what}: {e}"))
}

fn metadata_pairs(frame: &FrameBuffer, meta: &ExportMetadata) -> Vec<(String, String)> {
    vec![
        ("Software".into(), SOFTWARE.into()),
        (
            "Description".into(),
            format!(
                "Mandelbrot - Zoom: {}, Offset: {}, Iterations: {}",
                meta.view.zoom, meta.view.offset, meta.max_iteration
            ),
        ),
        ("MandelZoom.Zoom".into(), meta.view.zoom.to_string()),
        ("MandelZoom.Offset".into(), meta.view.offset.to_string()),
        ("MandelZoom.MaxIteration".into(), meta.max_iteration.to_string()),
        ("MandelZoom.ColorMode".into(), meta.color_mode.label().into()),
        ("MandelZoom.Frame".into(), meta.frame_index.to_string()),
        (
            "MandelZoom.Resolution".into(),
            format!("{}x{}", frame.width(), frame.height()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn meta() -> ExportMetadata {
        ExportMetadata {
            view: ViewState::initial(4, 3).unwrap(),
            max_iteration: 100,
            color_mode: ColorMode::Table,
            frame_index: 7,
        }
    }

    #[test]
    fn export_creates_valid_png() {
        let mut frame = FrameBuffer::new(4, 3).unwrap();
        frame.fill(0x336699);
        let dir = std::env::temp_dir().join("mandelzoom_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame.png");
        export_png(&frame, &path, &meta()).expect("export should succeed");

        let mut header = [0u8; 8];
        std::fs::File::open(&path)
            .and_then(|mut f| f.read_exact(&mut header))
            .expect("should read header");
        assert_eq!(&header, b"\x89PNG\r\n\x1a\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_embeds_view() {
        let frame = FrameBuffer::new(2, 2).unwrap();
        let dir = std::env::temp_dir().join("mandelzoom_test_export_meta");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("meta.png");
        export_png(&frame, &path, &meta()).expect("export should succeed");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let reader = decoder.read_info().expect("should read info");
        let texts = &reader.info().uncompressed_latin1_text;
        assert!(texts
            .iter()
            .any(|t| t.keyword == "Software" && t.text == "MandelZoom"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "MandelZoom.MaxIteration" && t.text == "100"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "MandelZoom.Frame" && t.text == "7"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let frame = FrameBuffer::new(2, 2).unwrap();
        let path = std::env::temp_dir()
            .join("mandelzoom_no_such_dir")
            .join("nested")
            .join("x.png");
        assert!(matches!(
            export_png(&frame, &path, &meta()),
            Err(RenderError::Export(_))
        ));
    }
}
