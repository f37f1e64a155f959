use roi_mapper::filters;
use roi_mapper::image::io::{
    load_image, save_grayscale_image, save_label_image, write_json_file,
};
use roi_mapper::roi::{extract_image_roi_map, RegionArea, RoiOptions};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub struct RoiToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub roi: RoiOptions,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    pub output: RoiOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Binarize the grayscale input at this level before extraction.
    pub threshold: Option<u8>,
    /// Invert the grayscale input (separate from the ROI polarity switch).
    pub invert: bool,
}

#[derive(Debug, Deserialize)]
pub struct RoiOutputConfig {
    #[serde(rename = "regions_json")]
    pub regions_json: PathBuf,
    #[serde(rename = "label_image")]
    pub label_image: PathBuf,
    /// Optional dump of the preprocessed grayscale input.
    pub gray_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RoiToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_image(&config.input)?;
    let mut gray = filters::grayscale(&image);
    if config.preprocess.invert {
        gray = filters::invert(&gray);
    }
    if let Some(level) = config.preprocess.threshold {
        gray = filters::threshold(&gray, level);
    }
    if let Some(path) = &config.output.gray_image {
        save_grayscale_image(&gray, path)?;
    }

    let start = Instant::now();
    let map = extract_image_roi_map(&gray, &config.roi).map_err(|e| e.to_string())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let summary = ExtractionSummary {
        width: map.width,
        height: map.height,
        positive_regions: map.positive_regions,
        negative_regions: map.negative_regions,
        elapsed_ms,
        options: config.roi,
        regions: map.region_areas(),
    };

    write_json_file(&config.output.regions_json, &summary)?;
    save_label_image(&map, &config.output.label_image)?;

    println!(
        "Labeled {} regions in {elapsed_ms:.3} ms ({} maxima, {} minima)",
        map.region_count(),
        map.positive_regions,
        map.negative_regions
    );
    println!(
        "Saved label image to {}",
        config.output.label_image.display()
    );
    println!(
        "Saved region summary to {}",
        config.output.regions_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: roi_extract <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionSummary {
    width: usize,
    height: usize,
    positive_regions: usize,
    negative_regions: usize,
    elapsed_ms: f64,
    options: RoiOptions,
    regions: Vec<RegionArea>,
}
