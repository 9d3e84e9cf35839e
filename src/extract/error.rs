use thiserror::Error;

/// Structural problems in the source markup. All of them abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("did not find <{tag} id=\"{id}\">")]
    ContainerNotFound { tag: String, id: String },

    #[error("found {element} without {attribute} attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("list id={list_id:?}: did not find <{heading}> with text before list")]
    MissingCategory { list_id: String, heading: String },

    #[error("list id={list_id:?}, item {item}: expected a <{expected}> element")]
    MissingContainer {
        list_id: String,
        item: usize,
        expected: String,
    },

    #[error("list id={list_id:?}, item {item}: expected <{expected}>, found <{found}>")]
    UnexpectedTag {
        list_id: String,
        item: usize,
        expected: String,
        found: String,
    },

    #[error("list id={list_id:?}, item {item}: did not find <{tag} class=\"{class}\">")]
    MissingPayload {
        list_id: String,
        item: usize,
        tag: String,
        class: String,
    },
}
