//! Generates a [post](https://learn.microsoft.com/en-us/typography/opentype/spec/post) table.

use baseline_types::orchestration::Work;
use write_fonts::tables::post::Post;

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

struct PostWork {}

pub fn create_post_work() -> Box<BeWork> {
    Box::new(PostWork {})
}

impl Work<Context, Error> for PostWork {
    fn name(&self) -> &'static str {
        "post"
    }

    /// Generate [post](https://learn.microsoft.com/en-us/typography/opentype/spec/post)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        // v2, so glyph names survive
        let post = Post::new_v2(context.glyph_order.iter().map(|g| g.as_str()));
        context.post.set(post);
        Ok(())
    }
}
