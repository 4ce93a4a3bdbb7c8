use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    /// False when the file already existed and was left alone.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if self.created {
            out.added_item(&self.path.display().to_string());
            out.newline();
            out.preformatted("Run `typedefgen bake` to generate headers.");
        } else {
            out.preformatted(&format!(
                "{} already exists, leaving it untouched",
                self.path.display()
            ));
        }
    }
}
