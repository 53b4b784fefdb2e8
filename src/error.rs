use thiserror::Error;

/// Errores del formulario de nueva tarjeta. El mazo no se modifica.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Selecciona al menos una opción correcta")]
    NoCorrectAnswer,

    #[error("Las preguntas de respuesta única solo admiten una opción correcta")]
    TooManyForSingle,

    #[error("Rellena todas las opciones")]
    BlankOption,

    #[error("Una tarjeta necesita al menos 2 opciones (tiene {0})")]
    TooFewOptions(usize),

    #[error("La respuesta {index} no existe: solo hay {len} opciones")]
    AnswerOutOfRange { index: usize, len: usize },
}

/// Errores de importación. El mazo y las estadísticas quedan intactos.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("El archivo no es JSON válido: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Archivo inválido: se esperaba una lista de flashcards")]
    NotAnArray,

    #[error("La flashcard {index} no es válida: {reason}")]
    InvalidCard { index: usize, reason: String },
}

impl ImportError {
    /// Nombre corto y estable del tipo de fallo.
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::MalformedJson(_) => "malformed-json",
            ImportError::NotAnArray => "not-an-array",
            ImportError::InvalidCard { .. } => "invalid-card",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("No hay ninguna opción seleccionada")]
    EmptySelection,

    #[error("La respuesta no corresponde al tipo de pregunta ({expected})")]
    AnswerShape { expected: &'static str },

    #[error("No hay ninguna flashcard. ¡Añade una nueva!")]
    NoCard,

    #[error("Esta flashcard ya está respondida")]
    AlreadyAnswered,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Almacenamiento no disponible: {0}")]
    Unavailable(String),
}
