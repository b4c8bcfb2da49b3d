use log::warn;

use crate::{
    config::FeedbackAssets,
    constants::{RUN_MAX_SPEED, WALK_MAX_SPEED},
    effects::FeedbackSink,
};

/// Which footstep loop should be audible this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footsteps {
    Silent,
    Walk,
    Run,
    /// Moving on the ground with a speed cap that maps to neither loop; cues are left as they are.
    Unchanged,
}

/// Pick the footstep loop from the probe-based ground signal and the speed cap.
pub fn select_footsteps(
    probe_grounded: bool,
    current_speed: f32,
    max_speed: i32,
    min_speed: f32,
) -> Footsteps {
    if !probe_grounded || current_speed <= min_speed {
        return Footsteps::Silent;
    }
    match max_speed {
        WALK_MAX_SPEED => Footsteps::Walk,
        RUN_MAX_SPEED => Footsteps::Run,
        _ => Footsteps::Unchanged,
    }
}

/// Frame-rate audio-state evaluation for walk/run loops.
///
/// A loop is only (re)started when it is not already playing, so the cue is not restarted
/// every frame.
pub fn update_footsteps(
    assets: &FeedbackAssets,
    probe_grounded: bool,
    current_speed: f32,
    max_speed: i32,
    sink: &mut impl FeedbackSink,
) -> Footsteps {
    let (Some(walk), Some(run)) = (assets.walk_cue, assets.run_cue) else {
        warn!("walk and run cues are not configured");
        return Footsteps::Unchanged;
    };

    let selected = select_footsteps(
        probe_grounded,
        current_speed,
        max_speed,
        assets.footstep_min_speed,
    );
    match selected {
        Footsteps::Walk => {
            if !sink.is_cue_playing(walk) {
                sink.play_cue(walk);
                sink.stop_cue(run);
            }
        }
        Footsteps::Run => {
            if !sink.is_cue_playing(run) {
                sink.stop_cue(walk);
                sink.play_cue(run);
            }
        }
        Footsteps::Silent => {
            sink.stop_cue(walk);
            sink.stop_cue(run);
        }
        Footsteps::Unchanged => {}
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{effects::Cue, test_support::RecordingSink};

    #[test]
    fn selection_table() {
        assert_eq!(select_footsteps(true, 2.0, 3, 1.0), Footsteps::Walk);
        assert_eq!(select_footsteps(true, 2.0, 5, 1.0), Footsteps::Run);
        assert_eq!(select_footsteps(true, 2.0, 4, 1.0), Footsteps::Unchanged);
        assert_eq!(select_footsteps(true, 1.0, 5, 1.0), Footsteps::Silent);
        assert_eq!(select_footsteps(false, 4.0, 5, 1.0), Footsteps::Silent);
    }

    #[test]
    fn run_loop_starts_once() {
        let mut sink = RecordingSink::default();
        let assets = FeedbackAssets::default();

        update_footsteps(&assets, true, 4.0, 5, &mut sink);
        update_footsteps(&assets, true, 4.0, 5, &mut sink);

        assert_eq!(sink.played, vec![Cue::Run]);
        assert_eq!(sink.stopped, vec![Cue::Walk]);
        assert!(sink.is_cue_playing(Cue::Run));
    }

    #[test]
    fn switching_to_walk_stops_run() {
        let mut sink = RecordingSink::default();
        let assets = FeedbackAssets::default();

        update_footsteps(&assets, true, 4.0, 5, &mut sink);
        update_footsteps(&assets, true, 2.5, 3, &mut sink);

        assert!(sink.is_cue_playing(Cue::Walk));
        assert!(!sink.is_cue_playing(Cue::Run));
    }

    #[test]
    fn leaving_ground_silences_both() {
        let mut sink = RecordingSink::default();
        let assets = FeedbackAssets::default();

        update_footsteps(&assets, true, 2.5, 3, &mut sink);
        let selected = update_footsteps(&assets, false, 2.5, 3, &mut sink);

        assert_eq!(selected, Footsteps::Silent);
        assert!(sink.playing.is_empty());
    }

    #[test]
    fn missing_cues_do_nothing() {
        let mut sink = RecordingSink::default();
        let selected = update_footsteps(&FeedbackAssets::none(), true, 4.0, 5, &mut sink);

        assert_eq!(selected, Footsteps::Unchanged);
        assert!(sink.played.is_empty());
        assert!(sink.stopped.is_empty());
    }
}
