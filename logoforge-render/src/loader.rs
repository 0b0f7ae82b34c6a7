//! Off-thread geometry building
//!
//! The extrusion pipeline can take a visible fraction of a second on large
//! logos, so it runs on a worker thread and the render loop polls for the
//! result. At most one build is in flight per loader; a result that arrives
//! after teardown is simply dropped by the caller.

use image::RgbaImage;
use logoforge_core::TriangleMesh;
use logoforge_shape::build_extruded_logo_geometry;
use tracing::debug;

/// Handle to an in-flight geometry build
pub struct GeometryLoader {
    receiver: flume::Receiver<Option<TriangleMesh>>,
}

impl GeometryLoader {
    /// Start building geometry from the logo image on a worker thread
    pub fn spawn(image: RgbaImage, target_height: f32) -> Self {
        let (sender, receiver) = flume::bounded(1);
        std::thread::spawn(move || {
            let mesh = build_extruded_logo_geometry(&image, target_height);
            debug!(built = mesh.is_some(), "geometry build finished");
            // The receiver may already be gone after teardown.
            let _ = sender.send(mesh);
        });
        Self { receiver }
    }

    /// Non-blocking poll.
    ///
    /// `None` while the build is still running; `Some(None)` when the build
    /// finished without usable geometry.
    pub fn poll(&self) -> Option<Option<TriangleMesh>> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::time::{Duration, Instant};

    fn poll_until_done(loader: &GeometryLoader) -> Option<TriangleMesh> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = loader.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "geometry build did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn delivers_mesh_for_a_solid_logo() {
        let image = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]));
        let loader = GeometryLoader::spawn(image, 2.6);
        let mesh = poll_until_done(&loader).expect("solid logo builds geometry");
        assert!(mesh.vertex_count() > 0);
    }

    #[test]
    fn delivers_none_for_an_unusable_logo() {
        let image = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 0]));
        let loader = GeometryLoader::spawn(image, 2.6);
        assert!(poll_until_done(&loader).is_none());
    }

    #[test]
    fn dropping_the_loader_does_not_panic_the_worker() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
        let loader = GeometryLoader::spawn(image, 2.6);
        drop(loader);
        // Worker finishes and discards its result on the closed channel.
        std::thread::sleep(Duration::from_millis(50));
    }
}
