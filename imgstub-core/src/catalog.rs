// imgstub_core/src/catalog.rs

/// Frame stills referenced by the calendar before the site config existed.
/// `seed` falls back to these tables when no config is scanned.
pub const FRAMES: &[&str] = &[
    "/frames/coraline-door.jpg",
    "/frames/getout-teacup.jpg",
    "/frames/terrifier3-art.jpg",
    "/frames/elmstreet-claws.jpg",
    "/frames/wwz-wall.jpg",
    "/frames/conjuring-basement.jpg",
    "/frames/sawx-trap.jpg",
    "/frames/sixth-red-door.jpg",
    "/frames/busan-door.jpg",
    "/frames/heretic-hallway.jpg",
    "/frames/fnaf-animatronic.jpg",
    "/frames/texas-leatherface.jpg",
    "/frames/wellness-tank.jpg",
    "/frames/hanselgretel-crossbow.jpg",
    "/frames/zombieland-clown.jpg",
    "/frames/evildead-rise-elevator.jpg",
    "/frames/chucky-reboot.jpg",
    "/frames/28days-empty-london.jpg",
    "/frames/insidious-red-faced.jpg",
    "/frames/screamvi-subway.jpg",
    "/frames/blair-sticks.jpg",
    "/frames/vanhelsing-castle.jpg",
    "/frames/exorcist-priest.jpg",
    "/frames/it-sewer.jpg",
    "/frames/shining-doors.jpg",
    "/frames/silence-mask.jpg",
    "/frames/friday-machete.jpg",
    "/frames/speakevil-dinner.jpg",
    "/frames/others-candle.jpg",
    "/frames/dayone-nyc.jpg",
    "/frames/nbc-jack-sally.jpg",
];

pub const FINALS: &[&str] = &[
    "/final/coraline.jpg",
    "/final/getout.jpg",
    "/final/terrifier3.jpg",
    "/final/elmstreet.jpg",
    "/final/wwz.jpg",
    "/final/conjuring.jpg",
    "/final/sawx.jpg",
    "/final/sixth-sense.jpg",
    "/final/busan.jpg",
    "/final/heretic.jpg",
    "/final/fnaf.jpg",
    "/final/texas-1974.jpg",
    "/final/wellness.jpg",
    "/final/hanselgretel.jpg",
    "/final/zombieland.jpg",
    "/final/evildead-rise.jpg",
    "/final/childsplay-2019.jpg",
    "/final/28days.jpg",
    "/final/insidious.jpg",
    "/final/screamvi.jpg",
    "/final/blair-1999.jpg",
    "/final/vanhelsing.jpg",
    "/final/exorcist.jpg",
    "/final/it-2017.jpg",
    "/final/shining-1980.jpg",
    "/final/silence.jpg",
    "/final/friday2009.jpg",
    "/final/speakevil.jpg",
    "/final/the-others.jpg",
    "/final/dayone.jpg",
    "/final/nbc.jpg",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Posters,
    Frames,
    Finals,
    All,
}

/// Targets from the embedded tables, fixed order frames then finals.
/// The catalog carries no posters, so that selection yields nothing.
pub fn select(sel: Selection) -> Vec<&'static str> {
    let mut out = Vec::new();
    if matches!(sel, Selection::Frames | Selection::All) {
        out.extend_from_slice(FRAMES);
    }
    if matches!(sel, Selection::Finals | Selection::All) {
        out.extend_from_slice(FINALS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(FRAMES.len(), 31);
        assert_eq!(FINALS.len(), 31);
    }

    #[test]
    fn all_concatenates_frames_then_finals() {
        let all = select(Selection::All);
        assert_eq!(all.len(), FRAMES.len() + FINALS.len());
        assert_eq!(all[0], FRAMES[0]);
        assert_eq!(all[FRAMES.len()], FINALS[0]);
    }

    #[test]
    fn single_lists() {
        assert_eq!(select(Selection::Frames), FRAMES.to_vec());
        assert_eq!(select(Selection::Finals), FINALS.to_vec());
    }

    #[test]
    fn no_posters_in_catalog() {
        assert!(select(Selection::Posters).is_empty());
    }
}
