//! # Registro de Items
//! src/items/registry.rs
//!
//! El dueño exclusivo de la colección de items en memoria y de sus
//! reglas de mutación: asignación de ids, lookup, actualización
//! parcial y borrado.
//!
//! El registro no hace I/O: recibe datos planos y retorna datos
//! planos (o `RegistryError::NotFound`). La capa HTTP lo invoca y
//! traduce el resultado a status codes.

use crate::items::types::{Item, ItemPayload};

/// Errores del registro
///
/// El único error de dominio es `NotFound`: un lookup por id que no
/// encuentra nada. Todo lo demás tiene éxito incondicionalmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No existe un item con el id solicitado
    NotFound,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound => write!(f, "Item not found"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registro de items en memoria
///
/// Mantiene una secuencia ordenada (orden de inserción) y un contador
/// monótono de ids. El contador nunca retrocede ni reutiliza valores:
/// borrar un item y crear otro no puede producir ids duplicados.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    /// Secuencia ordenada de items (orden de inserción)
    items: Vec<Item>,

    /// Próximo id a asignar (monótono, nunca reutilizado)
    next_id: u64,
}

impl ItemRegistry {
    /// Crea un registro vacío
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Crea un registro con los dos items iniciales
    ///
    /// Estado inicial del proceso: `id=1` e `id=2`.
    pub fn with_seed_items() -> Self {
        let mut registry = Self::new();
        registry.create(ItemPayload {
            name: Some("Item 1".to_string()),
            description: Some("This is item 1".to_string()),
        });
        registry.create(ItemPayload {
            name: Some("Item 2".to_string()),
            description: Some("This is item 2".to_string()),
        });
        registry
    }

    /// Retorna la secuencia completa de items, en orden de inserción
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Busca un item por id
    ///
    /// # Errores
    ///
    /// `RegistryError::NotFound` si ningún item tiene ese id.
    pub fn get(&self, id: u64) -> Result<&Item, RegistryError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(RegistryError::NotFound)
    }

    /// Crea un nuevo item y lo agrega al final de la secuencia
    ///
    /// El id lo asigna el registro con su contador monótono. Nunca
    /// falla: campos ausentes en el payload quedan ausentes en el item.
    ///
    /// Retorna una copia del item creado.
    pub fn create(&mut self, payload: ItemPayload) -> Item {
        let item = Item {
            id: self.next_id,
            name: payload.name,
            description: payload.description,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Actualiza `name` y/o `description` de un item existente
    ///
    /// Regla de actualización parcial: un campo se reemplaza solo si el
    /// payload trae un string presente y no vacío; en cualquier otro
    /// caso conserva su valor anterior. El `id` es inmutable.
    ///
    /// Nota: esto hace imposible "limpiar" un campo enviando `""`;
    /// es el contrato documentado del recurso, no un descuido.
    ///
    /// Retorna una copia del item actualizado.
    ///
    /// # Errores
    ///
    /// `RegistryError::NotFound` si ningún item tiene ese id.
    pub fn update(&mut self, id: u64, payload: ItemPayload) -> Result<Item, RegistryError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RegistryError::NotFound)?;

        apply_if_present(&mut item.name, payload.name);
        apply_if_present(&mut item.description, payload.description);

        Ok(item.clone())
    }

    /// Elimina un item del registro
    ///
    /// # Errores
    ///
    /// `RegistryError::NotFound` si ningún item tiene ese id.
    pub fn delete(&mut self, id: u64) -> Result<(), RegistryError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RegistryError::NotFound)?;

        self.items.remove(index);
        Ok(())
    }

    /// Cantidad de items en el registro
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Verifica si el registro está vacío
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::with_seed_items()
    }
}

/// Aplica la regla de actualización parcial sobre un campo
///
/// Solo un valor presente y no vacío reemplaza al anterior.
fn apply_if_present(current: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = incoming {
        if !value.is_empty() {
            *current = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, description: Option<&str>) -> ItemPayload {
        ItemPayload {
            name: name.map(|s| s.to_string()),
            description: description.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_seed_state() {
        let registry = ItemRegistry::with_seed_items();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list()[0].id, 1);
        assert_eq!(registry.list()[1].id, 2);
        assert_eq!(registry.list()[0].name.as_deref(), Some("Item 1"));
        assert_eq!(
            registry.list()[1].description.as_deref(),
            Some("This is item 2")
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ItemRegistry::new();

        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut registry = ItemRegistry::with_seed_items();

        let created = registry.create(payload(Some("Item 3"), Some("d3")));

        assert_eq!(created.id, 3);
        assert_eq!(created.name.as_deref(), Some("Item 3"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_create_ids_are_unique() {
        let mut registry = ItemRegistry::new();

        let mut ids = Vec::new();
        for i in 0..10 {
            let name = format!("n{}", i);
            ids.push(registry.create(payload(Some(name.as_str()), None)).id);
        }

        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_create_with_absent_fields() {
        let mut registry = ItemRegistry::with_seed_items();

        let created = registry.create(ItemPayload::default());

        assert_eq!(created.id, 3);
        assert!(created.name.is_none());
        assert!(created.description.is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut registry = ItemRegistry::with_seed_items();

        registry.delete(2).unwrap();
        let created = registry.create(payload(Some("new"), None));

        // El contador es monótono: no colisiona con el id=2 borrado
        // ni con el id=1 existente
        assert_eq!(created.id, 3);
        assert!(registry.get(2).is_err());
        assert!(registry.get(1).is_ok());
    }

    #[test]
    fn test_get_finds_inserted_item() {
        let mut registry = ItemRegistry::with_seed_items();
        let created = registry.create(payload(Some("Item 3"), Some("d3")));

        let found = registry.get(created.id).unwrap();
        assert_eq!(*found, created);
    }

    #[test]
    fn test_get_missing_id() {
        let registry = ItemRegistry::with_seed_items();

        assert_eq!(registry.get(99), Err(RegistryError::NotFound));
    }

    #[test]
    fn test_update_partial_only_description() {
        let mut registry = ItemRegistry::with_seed_items();

        let updated = registry
            .update(1, payload(None, Some("updated")))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name.as_deref(), Some("Item 1")); // sin cambios
        assert_eq!(updated.description.as_deref(), Some("updated"));
    }

    #[test]
    fn test_update_empty_string_keeps_old_value() {
        let mut registry = ItemRegistry::with_seed_items();

        let updated = registry.update(1, payload(Some(""), None)).unwrap();

        // Regla de campos "falsy": el string vacío no reemplaza nada
        assert_eq!(updated.name.as_deref(), Some("Item 1"));
        assert_eq!(updated.description.as_deref(), Some("This is item 1"));
    }

    #[test]
    fn test_update_both_fields() {
        let mut registry = ItemRegistry::with_seed_items();

        let updated = registry
            .update(2, payload(Some("renamed"), Some("rewritten")))
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("renamed"));
        assert_eq!(updated.description.as_deref(), Some("rewritten"));
    }

    #[test]
    fn test_update_does_not_change_id_or_order() {
        let mut registry = ItemRegistry::with_seed_items();

        registry.update(1, payload(Some("renamed"), None)).unwrap();

        let ids: Vec<u64> = registry.list().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_update_missing_id() {
        let mut registry = ItemRegistry::with_seed_items();

        let result = registry.update(99, payload(Some("x"), None));
        assert_eq!(result, Err(RegistryError::NotFound));
    }

    #[test]
    fn test_delete_removes_item() {
        let mut registry = ItemRegistry::with_seed_items();

        registry.delete(2).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(2), Err(RegistryError::NotFound));
        assert!(registry.get(1).is_ok());
    }

    #[test]
    fn test_delete_missing_id() {
        let mut registry = ItemRegistry::with_seed_items();

        assert_eq!(registry.delete(99), Err(RegistryError::NotFound));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_delete_twice_fails_second_time() {
        let mut registry = ItemRegistry::with_seed_items();

        assert!(registry.delete(1).is_ok());
        assert_eq!(registry.delete(1), Err(RegistryError::NotFound));
    }

    #[test]
    fn test_list_is_idempotent() {
        let registry = ItemRegistry::with_seed_items();

        let first: Vec<Item> = registry.list().to_vec();
        let second: Vec<Item> = registry.list().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = ItemRegistry::new();
        registry.create(payload(Some("a"), None));
        registry.create(payload(Some("b"), None));
        registry.create(payload(Some("c"), None));
        registry.delete(2).unwrap();
        registry.create(payload(Some("d"), None));

        let names: Vec<&str> = registry
            .list()
            .iter()
            .filter_map(|i| i.name.as_deref())
            .collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_registry_error_display() {
        assert_eq!(RegistryError::NotFound.to_string(), "Item not found");
    }
}
