//! Optional presentation of images after a successful run.
//!
//! Display is a capability, not part of the pipeline contract. Headless runs
//! and tests use [`Headless`]; the CLI's `--display` flag swaps in
//! [`ConsoleDisplay`], which describes each image on stdout.

use crate::imaging::ImageInfo;
use crate::output;
use image::DynamicImage;

/// Something that can present an image to the user.
pub trait Displayable {
    fn show(&self, title: &str, image: &DynamicImage);
}

/// Does nothing. Default for non-interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Displayable for Headless {
    fn show(&self, _title: &str, _image: &DynamicImage) {}
}

/// Prints a one-line description of each shown image.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

impl Displayable for ConsoleDisplay {
    fn show(&self, title: &str, image: &DynamicImage) {
        println!("{}", output::format_display_line(title, &ImageInfo::of(image)));
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use std::cell::RefCell;

    /// Records every `show` call as `(title, dimensions)`.
    #[derive(Default)]
    pub struct RecordingDisplay {
        pub shown: RefCell<Vec<(String, Dimensions)>>,
    }

    impl Displayable for RecordingDisplay {
        fn show(&self, title: &str, image: &DynamicImage) {
            self.shown
                .borrow_mut()
                .push((title.to_string(), Dimensions::of(image)));
        }
    }

    #[test]
    fn recording_display_keeps_order() {
        let display = RecordingDisplay::default();
        display.show("first", &DynamicImage::new_rgb8(1, 2));
        display.show("second", &DynamicImage::new_rgb8(3, 4));

        let shown = display.shown.borrow();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].0, "first");
        assert_eq!(shown[1].1, Dimensions { width: 3, height: 4 });
    }

    #[test]
    fn headless_accepts_any_image() {
        Headless.show("anything", &DynamicImage::new_luma8(1, 1));
    }
}
