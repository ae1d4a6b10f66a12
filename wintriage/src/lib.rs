/**
 * `wintriage` extracts normalized forensic records from offline Windows artifact sources
 * (a Security `EventLog` and Registry hives) for case review.
 *
 * Registry hives are consumed through the `RegistryReader`/`RegistryKey` capability traits,
 * the container format itself is not parsed here. EventLog containers are read with the
 * `evtx` crate.
 */
pub mod artifacts;
pub(crate) mod utils;
