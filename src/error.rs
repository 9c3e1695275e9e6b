use std::fs;
use std::ops::Range;
use std::path::PathBuf;
use annotate_snippets::{Annotation, Level, Message, Renderer, Snippet};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub level: Level,
    pub title: String,
    pub path: Option<PathBuf>,
    pub range: Option<Range<usize>>,
    pub notes: Vec<Box<RuntimeError>>,
}

pub type RResult<V> = Result<V, Vec<RuntimeError>>;

impl RuntimeError {
    pub fn print(&self) {
        match &self.path {
            None => self.print_snippet(Snippet::source(&self.title)),
            Some(path) => match fs::read_to_string(path) {
                Ok(source) => self.print_snippet(
                    Snippet::source(source.as_str())
                        .origin(&path.to_string_lossy())
                        .fold(true)
                ),
                Err(err) => self.print_snippet(Snippet::source(err.to_string().as_str())),
            }
        };
    }

    /// This could be inline with print, but Snippet doesn't copy its string...
    fn print_snippet(&self, mut snippet: Snippet) {
        if let Some(range) = &self.range {
            snippet = snippet.annotation(
                self.level.span(range.clone())
            );
        }

        let mut footers = vec![];
        let mut annotations = vec![];
        for annotation in self.notes.iter() {
            annotation.add_to_snippet(&mut annotations, &mut footers);
        }

        let msg = self.level.title(&self.title)
            .snippet(snippet.annotations(annotations))
            .footers(footers.into_iter());

        let renderer = Renderer::styled();

        eprintln!("{}", renderer.render(msg));
    }

    pub fn new(level: Level, title: &str) -> RuntimeError {
        RuntimeError {
            level,
            title: title.to_string(),
            path: None,
            range: None,
            notes: vec![],
        }
    }

    pub fn error(title: &str) -> RuntimeError {
        Self::new(Level::Error, title)
    }

    pub fn to_array(self) -> Vec<Self> {
        vec![self]
    }

    pub fn add_to_snippet<'a>(&'a self, annotations: &mut Vec<Annotation<'a>>, footers: &mut Vec<Message<'a>>) {
        let Some(span) = &self.range else {
            let mut our_footers = vec![];

            // Notes with spans of their own still annotate the shared snippet.
            for note in self.notes.iter() {
                note.add_to_snippet(annotations, &mut our_footers);
            }

            footers.push(
                self.level
                    .title(&self.title)
                    .footers(our_footers.into_iter())
            );

            return
        };

        annotations.push(
            self.level.span(span.clone())
                .label(&self.title)
        )
    }

    pub fn in_range(mut self, range: Range<usize>) -> RuntimeError {
        if self.range.is_some() {
            return self;
        }

        self.range = Some(range);
        self
    }

    pub fn in_file(mut self, path: PathBuf) -> RuntimeError {
        if self.path.is_some() {
            return self;
        }

        self.path = Some(path);
        self
    }
}

pub trait ErrInFile<R> {
    fn err_in_file(self, path: &PathBuf) -> R;
}

impl<V> ErrInFile<RResult<V>> for RResult<V> {
    fn err_in_file(self, path: &PathBuf) -> RResult<V> {
        self.map_err(|e| e.into_iter().map(|e| e.in_file(path.clone())).collect())
    }
}

pub trait TryCollectMany<R> {
    fn try_collect_many(self) -> RResult<R>;
}

impl<V, I: Iterator<Item=RResult<V>>, R: FromIterator<V>> TryCollectMany<R> for I {
    fn try_collect_many(self) -> RResult<R> {
        let mut values = vec![];
        let mut errors = vec![];

        for result in self {
            match result {
                Ok(result) => values.push(result),
                Err(result) => errors.extend(result),
            }
        }

        return match errors.is_empty() {
            true => Ok(R::from_iter(values)),
            false => Err(errors),
        }
    }
}

pub fn print_errors(errors: &Vec<RuntimeError>) {
    for error in errors.iter() {
        error.print();
        eprintln!();
    }
}

/// Titles of all errors, in order. Mostly useful for asserting on failures.
pub fn error_titles(errors: &Vec<RuntimeError>) -> Vec<&str> {
    errors.iter().map(|e| e.title.as_str()).collect_vec()
}

impl Eq for RuntimeError {

}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::error::{ErrInFile, error_titles, RResult, RuntimeError, TryCollectMany};

    #[test]
    fn range_and_file_are_only_set_once() {
        let error = RuntimeError::error("Syntax error")
            .in_range(3..5)
            .in_range(7..9)
            .in_file(PathBuf::from("a.go"))
            .in_file(PathBuf::from("b.go"));

        assert_eq!(error.range, Some(3..5));
        assert_eq!(error.path, Some(PathBuf::from("a.go")));
    }

    #[test]
    fn collect_many_gathers_every_error() {
        let results: Vec<RResult<i32>> = vec![
            Ok(1),
            Err(RuntimeError::error("first").to_array()),
            Ok(2),
            Err(RuntimeError::error("second").to_array()),
        ];

        let collected: RResult<Vec<i32>> = results.into_iter().try_collect_many();
        let errors = collected.unwrap_err();
        assert_eq!(error_titles(&errors), vec!["first", "second"]);
    }

    #[test]
    fn err_in_file_tags_all_errors() {
        let result: RResult<()> = Err(vec![RuntimeError::error("a"), RuntimeError::error("b")]);
        let errors = result.err_in_file(&PathBuf::from("x.go")).unwrap_err();
        assert!(errors.iter().all(|e| e.path == Some(PathBuf::from("x.go"))));
    }
}
