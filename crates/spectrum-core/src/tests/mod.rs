mod assessment;
mod leads;
mod roadmap;
mod share;
mod store;
