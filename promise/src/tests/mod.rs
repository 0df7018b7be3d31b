mod fixtures;
mod sequence;
