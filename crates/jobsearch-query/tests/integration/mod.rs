mod connection_failure;
mod lookup;
mod suggest_and_zip;
