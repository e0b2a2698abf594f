use image::{GrayImage, Luma};
use silhouette::{BitRaster, Pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let image = synthetic_blob(160, 160);
    info!(width = image.width(), height = image.height(), "synthesized test mask");

    let pipeline = Pipeline::builder().build();
    let outline = pipeline.process(&image)?;
    info!(
        segments = outline.path.len(),
        mask_width = outline.mask_width,
        mask_height = outline.mask_height,
        "fitted closed outline"
    );

    outline.save_svg("outline.svg", "#1a1a1a")?;
    outline.save_json("outline.json")?;

    // also dump the thresholded mask for visual comparison
    let mask = BitRaster::from_gray_image(&image);
    mask.to_coverage_image(26, 26, 26).save("mask.png")?;

    info!("wrote outline.svg, outline.json and mask.png");
    Ok(())
}

/// A lumpy blob with speck noise: two overlapping discs, a sine-wavy
/// bulge and scattered single pixels for the smoother to clean up.
fn synthetic_blob(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    let discs = [(70.0f32, 80.0f32, 36.0f32), (100.0, 70.0, 28.0)];
    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (x as f32, y as f32);
            let mut set = discs
                .iter()
                .any(|&(cx, cy, r)| (fx - cx).powi(2) + (fy - cy).powi(2) <= r * r);
            // wavy bulge along the bottom of the first disc
            let bulge = 112.0 + 6.0 * (fx / 9.0).sin();
            if (50.0..95.0).contains(&fx) && (104.0..bulge).contains(&fy) {
                set = true;
            }
            if set {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
    }
    // deterministic speck noise
    for i in 0..24u32 {
        let x = (i * 37 + 11) % width;
        let y = (i * 53 + 29) % height;
        let p = img.get_pixel_mut(x, y);
        p.0[0] = if p.0[0] == 0 { 255 } else { 0 };
    }
    img
}
