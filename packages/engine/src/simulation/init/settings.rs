use rand::Rng;

use super::perf_stats::PerfStats;
use super::StageCore;

pub(super) fn enable_perf_metrics<R: Rng>(stage: &mut StageCore<R>, enabled: bool) {
    stage.perf_enabled = enabled;
    if !enabled {
        stage.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: Rng>(stage: &StageCore<R>) -> PerfStats {
    stage.perf_stats.clone()
}
