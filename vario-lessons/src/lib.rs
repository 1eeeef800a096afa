mod lessons;
mod prelude;


pub use lessons::{find, lesson_names, practices, run_all, LessonReport};
pub use prelude::{menagerie, standard_declarations};
