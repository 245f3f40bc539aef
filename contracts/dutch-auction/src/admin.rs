use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
