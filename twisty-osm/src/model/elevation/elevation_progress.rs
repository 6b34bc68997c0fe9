use kdam::{Bar, BarExt};
use std::sync::Mutex;
use twisty_core::model::{source::ElevationService, Point, TwistyError};

/// wraps an [`ElevationService`], advancing a progress bar once per road looked up.
/// the number of roads is not known until assembly completes, so the bar counts
/// without a total.
pub struct ElevationProgress<'a> {
    service: &'a dyn ElevationService,
    bar: Mutex<Bar>,
}

impl<'a> ElevationProgress<'a> {
    pub fn new(service: &'a dyn ElevationService) -> Result<ElevationProgress<'a>, TwistyError> {
        let bar = Bar::builder()
            .desc("elevation lookup")
            .build()
            .map_err(|e| TwistyError::InternalError(format!("error building progress bar: {e}")))?;
        Ok(ElevationProgress {
            service,
            bar: Mutex::new(bar),
        })
    }
}

impl ElevationService for ElevationProgress<'_> {
    fn get_elevations(&self, points: &[Point]) -> Result<Option<Vec<f64>>, TwistyError> {
        let result = self.service.get_elevations(points);
        if let Ok(mut bar) = self.bar.lock() {
            let _ = bar.update(1);
        }
        result
    }
}
