use color_eyre::{Result, eyre::WrapErr};
use fjall::PartitionHandle;

#[derive(Debug, Clone, Copy)]
pub enum SettingKey {
    LastAddress,
    AccessNodeUrl,
}

impl SettingKey {
    fn storage_key(self) -> &'static str {
        match self {
            SettingKey::LastAddress => "v1::settings::last_address",
            SettingKey::AccessNodeUrl => "v1::settings::access_node_url",
        }
    }
}

#[derive(Clone)]
pub struct SettingsRepository {
    handle: PartitionHandle,
}

impl SettingsRepository {
    pub(crate) fn new(handle: PartitionHandle) -> Self {
        Self { handle }
    }

    pub fn get(&self, key: SettingKey) -> Result<Option<String>> {
        self.handle
            .get(key.storage_key().as_bytes())
            .wrap_err("failed to read setting")?
            .map(|bytes| {
                String::from_utf8(bytes.to_vec()).wrap_err("setting value is not valid UTF-8")
            })
            .transpose()
    }

    pub fn set(&self, key: SettingKey, value: &str) -> Result<()> {
        self.handle
            .insert(key.storage_key().as_bytes(), value.as_bytes())
            .wrap_err("failed to write setting")
    }

    #[cfg(test)]
    pub(crate) fn partition(&self) -> &PartitionHandle {
        &self.handle
    }

    pub fn remove(&self, key: SettingKey) -> Result<()> {
        self.handle
            .remove(key.storage_key().as_bytes())
            .wrap_err("failed to remove setting")
    }
}
