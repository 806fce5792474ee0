//! Display text lookup.
//!
//! The store only relies on the [`Translator`] contract: a language, a key
//! and positional arguments go in, text comes out, and unknown keys come
//! back unchanged. [`Catalog`] is the built-in table.

use crate::domain::settings::Language;

pub trait Translator {
    /// Returns the text for `key`, substituting `{0}`, `{1}`, ... with `args`.
    /// Falls back to `key` itself when no mapping exists.
    fn translate(&self, language: Language, key: &str, args: &[&str]) -> String;
}

/// Built-in English, Spanish and French strings
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    fn lookup(language: Language, key: &str) -> Option<&'static str> {
        let text = match (language, key) {
            (Language::En, "defaultColumnTodo") => "To Do",
            (Language::Es, "defaultColumnTodo") => "Por hacer",
            (Language::Fr, "defaultColumnTodo") => "À faire",

            (Language::En, "defaultColumnInProgress") => "In Progress",
            (Language::Es, "defaultColumnInProgress") => "En progreso",
            (Language::Fr, "defaultColumnInProgress") => "En cours",

            (Language::En, "defaultColumnDone") => "Done",
            (Language::Es, "defaultColumnDone") => "Hecho",
            (Language::Fr, "defaultColumnDone") => "Terminé",

            (Language::En, "boardNameCannotBeEmpty") => {
                "Board name must be at least 3 characters long."
            }
            (Language::Es, "boardNameCannotBeEmpty") => {
                "El nombre del tablero debe tener al menos 3 caracteres."
            }
            (Language::Fr, "boardNameCannotBeEmpty") => {
                "Le nom du tableau doit contenir au moins 3 caractères."
            }

            (Language::En, "taskTitleCannotBeEmpty") => {
                "Task title must be at least 3 characters long."
            }
            (Language::Es, "taskTitleCannotBeEmpty") => {
                "El título de la tarea debe tener al menos 3 caracteres."
            }
            (Language::Fr, "taskTitleCannotBeEmpty") => {
                "Le titre de la tâche doit contenir au moins 3 caractères."
            }

            (Language::En, "validationFutureDate") => "Due date cannot be in the past.",
            (Language::Es, "validationFutureDate") => {
                "La fecha de vencimiento no puede estar en el pasado."
            }
            (Language::Fr, "validationFutureDate") => {
                "La date d'échéance ne peut pas être dans le passé."
            }

            (Language::En, "boardNotFound") => "Board not found.",
            (Language::Es, "boardNotFound") => "Tablero no encontrado.",
            (Language::Fr, "boardNotFound") => "Tableau introuvable.",

            (Language::En, "noColumnAvailable") => {
                "No column selected or available for the new task."
            }
            (Language::Es, "noColumnAvailable") => {
                "No hay ninguna columna disponible para la nueva tarea."
            }
            (Language::Fr, "noColumnAvailable") => {
                "Aucune colonne disponible pour la nouvelle tâche."
            }

            (Language::En, "confirmDeleteBoard") => {
                "Are you sure you want to delete the board \"{0}\"?"
            }
            (Language::Es, "confirmDeleteBoard") => {
                "¿Seguro que quieres eliminar el tablero \"{0}\"?"
            }
            (Language::Fr, "confirmDeleteBoard") => {
                "Voulez-vous vraiment supprimer le tableau « {0} » ?"
            }

            (Language::En, "confirmDeleteTask") => "Are you sure you want to delete this task?",
            (Language::Es, "confirmDeleteTask") => "¿Seguro que quieres eliminar esta tarea?",
            (Language::Fr, "confirmDeleteTask") => "Voulez-vous vraiment supprimer cette tâche ?",

            (Language::En, "priorityLow") => "Low",
            (Language::Es, "priorityLow") => "Baja",
            (Language::Fr, "priorityLow") => "Basse",

            (Language::En, "priorityMedium") => "Medium",
            (Language::Es, "priorityMedium") => "Media",
            (Language::Fr, "priorityMedium") => "Moyenne",

            (Language::En, "priorityHigh") => "High",
            (Language::Es, "priorityHigh") => "Alta",
            (Language::Fr, "priorityHigh") => "Haute",

            (Language::En, "noTasksInColumn") => "No tasks in this column.",
            (Language::Es, "noTasksInColumn") => "No hay tareas en esta columna.",
            (Language::Fr, "noTasksInColumn") => "Aucune tâche dans cette colonne.",

            (Language::En, "noSearchResults") => "No tasks match your search.",
            (Language::Es, "noSearchResults") => "Ninguna tarea coincide con tu búsqueda.",
            (Language::Fr, "noSearchResults") => "Aucune tâche ne correspond à votre recherche.",

            (Language::En, "noBoardsYet") => "No boards yet. Create your first one!",
            (Language::Es, "noBoardsYet") => "Aún no hay tableros. ¡Crea el primero!",
            (Language::Fr, "noBoardsYet") => "Aucun tableau pour l'instant. Créez le premier !",

            (Language::En, "unexpectedError") => "Something went wrong.",
            (Language::Es, "unexpectedError") => "Algo salió mal.",
            (Language::Fr, "unexpectedError") => "Une erreur s'est produite.",

            _ => return None,
        };
        Some(text)
    }
}

impl Translator for Catalog {
    fn translate(&self, language: Language, key: &str, args: &[&str]) -> String {
        match Self::lookup(language, key) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

/// Replaces `{0}`, `{1}`, ... in `template`. Placeholders without a matching
/// argument are left as-is.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (index, arg)| {
            text.replace(&format!("{{{}}}", index), arg)
        })
}
