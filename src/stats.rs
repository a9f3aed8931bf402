use fnv::FnvHashMap;

use types::Rating;

/// Maps the string identifiers of users and tracks to consecutive integer
/// indices and keeps basic statistics of the snapshot. The index order is the
/// encounter order of a single pass over the ratings, which fixes one
/// consistent row/column ordering for the matrix built from the same pass.
pub struct DataDictionary {
    user_dict: FnvHashMap<String, u32>,
    item_dict: FnvHashMap<String, u32>,
    num_ratings: u64,
}

impl DataDictionary {

    pub fn from_ratings<'a, I>(ratings: I) -> DataDictionary
        where I: IntoIterator<Item = &'a Rating> {

        let mut user_index: u32 = 0;
        let mut user_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut item_index: u32 = 0;
        let mut item_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut num_ratings: u64 = 0;

        for rating in ratings {

            if !user_dict.contains_key(&rating.user_id) {
                user_dict.insert(rating.user_id.clone(), user_index);
                user_index += 1;
            }

            if !item_dict.contains_key(&rating.item_id) {
                item_dict.insert(rating.item_id.clone(), item_index);
                item_index += 1;
            }

            num_ratings += 1;
        }

        DataDictionary { user_dict, item_dict, num_ratings }
    }

    pub fn num_users(&self) -> usize {
        self.user_dict.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_dict.len()
    }

    pub fn num_ratings(&self) -> u64 {
        self.num_ratings
    }

    pub fn user_index(&self, name: &str) -> Option<u32> {
        self.user_dict.get(name).cloned()
    }

    pub fn item_index(&self, name: &str) -> Option<u32> {
        self.item_dict.get(name).cloned()
    }
}

/// Reverse index from matrix row/column indices back to the original string
/// identifiers, used when results leave the engine.
pub struct Renaming {
    user_names: FnvHashMap<u32, String>,
    item_names: FnvHashMap<u32, String>,
}

impl Renaming {

    pub fn user_name(&self, user_index: u32) -> &str {
        &self.user_names[&user_index]
    }

    pub fn item_name(&self, item_index: u32) -> &str {
        &self.item_names[&item_index]
    }
}

impl<'a> From<&'a DataDictionary> for Renaming {

    fn from(data_dict: &DataDictionary) -> Self {

        let mut user_names: FnvHashMap<u32, String> =
            FnvHashMap::with_capacity_and_hasher(data_dict.num_users(), Default::default());

        let mut item_names: FnvHashMap<u32, String> =
            FnvHashMap::with_capacity_and_hasher(data_dict.num_items(), Default::default());

        for (user, user_index) in data_dict.user_dict.iter() {
            user_names.insert(*user_index, user.clone());
        }

        for (item, item_index) in data_dict.item_dict.iter() {
            item_names.insert(*item_index, item.clone());
        }

        Renaming { user_names, item_names }
    }
}
