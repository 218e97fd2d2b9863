use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct Storage<T> {
    data: Vec<Option<T>>,
    removed_ids: VecDeque<usize>,
}

impl<T> Storage<T> {
    pub fn store(&mut self, item: T) -> usize {
        let id = self.get_new_id();
        self.data[id] = Some(item);

        id
    }

    pub fn contains(&self, id: usize) -> bool {
        matches!(self.data.get(id), Some(Some(_)))
    }

    pub fn get(&self, id: usize) -> Result<&T> {
        match self.data.get(id) {
            Some(item) => Ok(item.as_ref().ok_or_else(|| anyhow!("Storage item {} not found", id))?),
            None => bail!("Storage item {} not found", id),
        }
    }

    pub fn get_mut(&mut self, id: usize) -> Result<&mut T> {
        match self.data.get_mut(id) {
            Some(item) => Ok(item.as_mut().ok_or_else(|| anyhow!("Storage item {} not found", id))?),
            None => bail!("Storage item {} not found", id),
        }
    }

    pub fn remove(&mut self, id: usize) -> Option<T> {
        if id >= self.data.len() || self.data[id].is_none() {
            return None;
        }

        let item = self.data[id].take();
        self.removed_ids.push_back(id);

        item
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().filter_map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.data.len() - self.removed_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == self.removed_ids.len()
    }

    fn get_new_id(&mut self) -> usize {
        if let Some(id) = self.removed_ids.pop_front() {
            id
        } else {
            self.data.push(None);
            self.data.len() - 1
        }
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self { data: Vec::default(), removed_ids: VecDeque::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_ids_are_reused() {
        let mut storage = Storage::default();
        let a = storage.store("a");
        let b = storage.store("b");

        assert_eq!(storage.remove(a), Some("a"));
        assert!(!storage.contains(a));
        assert_eq!(storage.len(), 1);

        let c = storage.store("c");
        assert_eq!(c, a);
        assert_eq!(*storage.get(b).unwrap(), "b");
        assert_eq!(storage.iter().count(), 2);
    }

    #[test]
    fn missing_item_is_an_error() {
        let mut storage = Storage::<u32>::default();
        assert!(storage.get(3).is_err());
        assert!(storage.get_mut(0).is_err());
        assert!(storage.remove(0).is_none());
        assert!(storage.is_empty());
    }
}
