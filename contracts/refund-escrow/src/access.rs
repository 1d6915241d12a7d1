use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::PrimaryTransferredEventData;
use crate::storage;

/// Fails with `Unauthorized` unless `caller` is the current primary.
pub fn require_primary(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let primary = storage::get_primary(env).ok_or(Error::NotInitialized)?;
    if *caller != primary {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Hand the primary role to `new_primary`. The escrow's own address is not
/// an acceptable holder.
pub fn transfer_primary(env: &Env, caller: &Address, new_primary: &Address) -> Result<(), Error> {
    require_primary(env, caller)?;

    if *new_primary == env.current_contract_address() {
        return Err(Error::InvalidAddress);
    }

    storage::set_primary(env, new_primary);
    log!(env, "primary transferred", caller.clone(), new_primary.clone());

    PrimaryTransferredEventData {
        previous: caller.clone(),
        new_primary: new_primary.clone(),
    }
    .publish(env);

    Ok(())
}
